#![no_main]

mod common;

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use quill_lib::{
  Editor,
  clipboard::MemoryClipboard,
};

use crate::common::{
  EditorOp,
  decode_scenario,
};

fuzz_target!(|data: &[u8]| {
  let scenario = decode_scenario(data);
  let mut editor = Editor::new();
  editor.begin(scenario.initial);
  if scenario.with_clipboard {
    editor.set_clipboard(Arc::new(MemoryClipboard::new()));
  }

  for op in scenario.ops {
    match op {
      EditorOp::Command(command) => {
        let _ = editor.perform_command(command);
      },
      EditorOp::Type(text) => editor.input_chars(text.chars()),
      EditorOp::Select { anchor, head } => editor.set_selection(anchor as usize, head as usize),
      EditorOp::Navigate(navigation) => editor.set_navigation(navigation),
      EditorOp::Replace(text) => editor.set_text(text),
    }

    let (lo, hi) = editor.sorted_selection();
    let text = editor.text();
    assert!(lo <= hi && hi <= text.len());
    assert!(text.is_char_boundary(lo) && text.is_char_boundary(hi));
    assert!(editor.history().undo_len() <= editor.history().capacity());
  }

  while editor.undo() {}
  assert!(!editor.can_undo());
});
