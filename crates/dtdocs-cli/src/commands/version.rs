//! Version command implementation.

use crate::style::banner::print_version_banner;
use crate::style::print_labeled;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run() {
    print_version_banner(VERSION);
    print_labeled("Package", &format!("{NAME} {VERSION}"));
    print_labeled("Pages", &dtdocs_view::PageId::ALL.len().to_string());
    print_labeled("Target", std::env::consts::ARCH);
    print_labeled("OS", std::env::consts::OS);
}
