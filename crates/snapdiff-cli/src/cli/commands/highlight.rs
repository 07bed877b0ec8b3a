//! `snapdiff highlight <original> <target>` – print the differing part of a URL pair.

use snapdiff_core::url_diff;

pub fn run_highlight(original: &str, target: &str) {
    let diff = url_diff::highlight(original, target);
    println!("original: {}", diff.original);
    println!("target:   {}[{}]{}", diff.prefix, diff.middle, diff.suffix);
    println!("html:     {}", diff.marked_target());
}
