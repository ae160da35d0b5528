//! Benchmarks for codepoint stepping in quill-core.
//!
//! Run with: `cargo bench -p quill-core --bench utf8`

use divan::{
  Bencher,
  black_box,
};
use quill_core::utf8::{
  floor_boundary,
  next_boundary,
  prev_boundary,
};

fn main() {
  divan::main();
}

fn make_text(line: &str, size: usize) -> String {
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(line);
  }
  s
}

#[divan::bench(args = [1024, 16 * 1024])]
fn walk_forward_ascii(bencher: Bencher, size: usize) {
  let text = make_text("The quick brown fox jumps over the lazy dog. ", size);
  bencher.bench(|| {
    let mut pos = 0;
    while pos < text.len() {
      pos = next_boundary(black_box(&text), pos);
    }
    pos
  });
}

#[divan::bench(args = [1024, 16 * 1024])]
fn walk_backward_mixed(bencher: Bencher, size: usize) {
  let text = make_text("héllo 世界 🦀 ", size);
  bencher.bench(|| {
    let mut pos = text.len();
    while pos > 0 {
      pos = prev_boundary(black_box(&text), pos);
    }
    pos
  });
}

#[divan::bench]
fn floor_inside_codepoint(bencher: Bencher) {
  let text = make_text("世界", 4096);
  bencher.bench(|| floor_boundary(black_box(&text), black_box(2049)));
}
