use quill_core::navigation::NavigationIndices;
use quill_lib::Command;

const MAX_INITIAL_BYTES: usize = 4 * 1024;
const MAX_OPS: usize = 128;
const MAX_INSERT_BYTES: usize = 64;

const COMMANDS: [Command; 32] = [
  Command::None,
  Command::Undo,
  Command::Redo,
  Command::NewLine,
  Command::Cut,
  Command::Copy,
  Command::Paste,
  Command::SelectAll,
  Command::Backspace,
  Command::Delete,
  Command::DeleteWordLeft,
  Command::DeleteWordRight,
  Command::Left,
  Command::Right,
  Command::Up,
  Command::Down,
  Command::WordLeft,
  Command::WordRight,
  Command::Start,
  Command::End,
  Command::LineStart,
  Command::LineEnd,
  Command::SelectLeft,
  Command::SelectRight,
  Command::SelectUp,
  Command::SelectDown,
  Command::SelectWordLeft,
  Command::SelectWordRight,
  Command::SelectStart,
  Command::SelectEnd,
  Command::SelectLineStart,
  Command::SelectLineEnd,
];

#[derive(Debug, Clone)]
pub enum EditorOp {
  Command(Command),
  Type(String),
  Select { anchor: u16, head: u16 },
  Navigate(NavigationIndices),
  Replace(String),
}

pub struct Scenario {
  pub with_clipboard: bool,
  pub initial:        String,
  pub ops:            Vec<EditorOp>,
}

pub fn decode_scenario(data: &[u8]) -> Scenario {
  let mut cursor = ByteCursor::new(data);
  let with_clipboard = cursor.next_u8() & 1 == 1;
  let initial_len = cursor.next_usize(MAX_INITIAL_BYTES);
  let initial = lossy_text(cursor.next_bytes(initial_len));
  let op_count = cursor.next_usize(MAX_OPS);
  let mut ops = Vec::with_capacity(op_count);
  for _ in 0..op_count {
    let op = match cursor.next_u8() % 8 {
      0 | 1 | 2 | 3 => {
        EditorOp::Command(COMMANDS[cursor.next_u8() as usize % COMMANDS.len()])
      },
      4 => {
        let len = cursor.next_usize(MAX_INSERT_BYTES);
        EditorOp::Type(lossy_text(cursor.next_bytes(len)))
      },
      5 => {
        EditorOp::Select {
          anchor: cursor.next_u16(),
          head:   cursor.next_u16(),
        }
      },
      6 => {
        EditorOp::Navigate(NavigationIndices {
          up:         cursor.next_u16() as usize,
          down:       cursor.next_u16() as usize,
          line_start: cursor.next_u16() as usize,
          line_end:   cursor.next_u16() as usize,
        })
      },
      _ => {
        let len = cursor.next_usize(MAX_INSERT_BYTES);
        EditorOp::Replace(lossy_text(cursor.next_bytes(len)))
      },
    };
    ops.push(op);
  }

  Scenario {
    with_clipboard,
    initial,
    ops,
  }
}

fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

struct ByteCursor<'a> {
  data: &'a [u8],
  pos:  usize,
}

impl<'a> ByteCursor<'a> {
  fn new(data: &'a [u8]) -> Self {
    Self { data, pos: 0 }
  }

  fn next_u8(&mut self) -> u8 {
    let value = self.data.get(self.pos).copied().unwrap_or(0);
    self.pos = self.pos.saturating_add(1);
    value
  }

  fn next_u16(&mut self) -> u16 {
    let lo = self.next_u8() as u16;
    let hi = self.next_u8() as u16;
    lo | (hi << 8)
  }

  fn next_usize(&mut self, max: usize) -> usize {
    if max == 0 {
      return 0;
    }
    (self.next_u16() as usize) % (max + 1)
  }

  fn next_bytes(&mut self, len: usize) -> &'a [u8] {
    let start = self.pos.min(self.data.len());
    let end = start.saturating_add(len).min(self.data.len());
    self.pos = end;
    &self.data[start..end]
  }
}
