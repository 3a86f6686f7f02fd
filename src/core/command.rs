//! Semantic commands, independent of the keys bound to them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== cursor ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,

    // ==================== selection ====================
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectLineStart,
    SelectLineEnd,
    SelectAll,

    // ==================== editing ====================
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    Undo,
    Redo,
    Clear,
    Cut,
    Copy,
    Paste,
    WrapText,

    // ==================== file ====================
    Open,
    Save,
    SaveAs,
    Print,

    // ==================== window ====================
    Screenshot,
    FileMenu,
    EditMenu,
    MenuBar,
    Quit,
}

const ALL: &[Command] = &[
    Command::CursorLeft,
    Command::CursorRight,
    Command::CursorUp,
    Command::CursorDown,
    Command::CursorLineStart,
    Command::CursorLineEnd,
    Command::CursorFileStart,
    Command::CursorFileEnd,
    Command::PageUp,
    Command::PageDown,
    Command::SelectLeft,
    Command::SelectRight,
    Command::SelectUp,
    Command::SelectDown,
    Command::SelectLineStart,
    Command::SelectLineEnd,
    Command::SelectAll,
    Command::InsertNewline,
    Command::InsertTab,
    Command::DeleteBackward,
    Command::DeleteForward,
    Command::Undo,
    Command::Redo,
    Command::Clear,
    Command::Cut,
    Command::Copy,
    Command::Paste,
    Command::WrapText,
    Command::Open,
    Command::Save,
    Command::SaveAs,
    Command::Print,
    Command::Screenshot,
    Command::FileMenu,
    Command::EditMenu,
    Command::MenuBar,
    Command::Quit,
];

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::SelectLeft => "selectLeft",
            Command::SelectRight => "selectRight",
            Command::SelectUp => "selectUp",
            Command::SelectDown => "selectDown",
            Command::SelectLineStart => "selectLineStart",
            Command::SelectLineEnd => "selectLineEnd",
            Command::SelectAll => "selectAll",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Clear => "clear",
            Command::Cut => "cut",
            Command::Copy => "copy",
            Command::Paste => "paste",
            Command::WrapText => "wrapText",
            Command::Open => "open",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Print => "print",
            Command::Screenshot => "screenshot",
            Command::FileMenu => "fileMenu",
            Command::EditMenu => "editMenu",
            Command::MenuBar => "menuBar",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        let name = name.trim();
        ALL.iter().copied().find(|cmd| cmd.name() == name)
    }

    /// Commands that mutate the text surface.
    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::Undo
                | Command::Redo
                | Command::Clear
                | Command::Cut
                | Command::Paste
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::PageUp
                | Command::PageDown
        )
    }

    pub fn is_selection_command(&self) -> bool {
        matches!(
            self,
            Command::SelectLeft
                | Command::SelectRight
                | Command::SelectUp
                | Command::SelectDown
                | Command::SelectLineStart
                | Command::SelectLineEnd
                | Command::SelectAll
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
