//! Bundles `assets/css` into the single stylesheet `App` links via `asset!`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const BUNDLE_DIR: &str = "assets/dist";
// Must match the path given to `asset!` in src/app/mod.rs
const BUNDLE_PATH: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}");

    // Directory mtimes don't change when a file is edited in place
    let sheets = fs::read_dir(CSS_DIR).expect("Failed to read assets/css");
    for entry in sheets.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }

    fs::create_dir_all(BUNDLE_DIR).expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    // Rewriting an identical bundle would make `asset!` rebuild the crate
    let unchanged = fs::read_to_string(BUNDLE_PATH).is_ok_and(|current| current == css.code);
    if !unchanged {
        fs::write(BUNDLE_PATH, css.code).expect("Failed to write bundle.css");
    }
}
