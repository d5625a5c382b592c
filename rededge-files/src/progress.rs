use crate::config::ProgressMode;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

const TEMPLATE: &str = "[{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} ETA {eta} | {msg}";

/// Build the bar shown while downloading `total_files` files. Hidden bars accept all calls.
pub fn download_bar(mode: ProgressMode, total_files: usize) -> ProgressBar {
    let visible = match mode {
        ProgressMode::Auto => std::io::stderr().is_terminal(),
        ProgressMode::Always => true,
        ProgressMode::Never => false,
    };
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total_files as u64);
    bar.set_style(
        ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
