//! Names of the methods the window channel answers.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowMethod {
    DragStart,
    DragEnd,
    Maximize,
    Restore,
    Iconify,
    Focus,
    Show,
    Hide,
    Close,
    SetTitle,
    GetTitle,
    GetWidth,
    GetHeight,
    GetSize,
    GetPosition,
    GetPositionX,
    GetPositionY,
    GetCursorPosition,
    SetSize,
    SetPosition,
    SetCursorPosition,
}

impl WindowMethod {
    pub const ALL: [Self; 21] = [
        Self::DragStart,
        Self::DragEnd,
        Self::Maximize,
        Self::Restore,
        Self::Iconify,
        Self::Focus,
        Self::Show,
        Self::Hide,
        Self::Close,
        Self::SetTitle,
        Self::GetTitle,
        Self::GetWidth,
        Self::GetHeight,
        Self::GetSize,
        Self::GetPosition,
        Self::GetPositionX,
        Self::GetPositionY,
        Self::GetCursorPosition,
        Self::SetSize,
        Self::SetPosition,
        Self::SetCursorPosition,
    ];

    /// Wire name, as the shell sends it.
    pub fn name(self) -> &'static str {
        match self {
            Self::DragStart => "onDragStart",
            Self::DragEnd => "onDragEnd",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::Iconify => "iconify",
            Self::Focus => "focus",
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Close => "close",
            Self::SetTitle => "setTitle",
            Self::GetTitle => "getTitle",
            Self::GetWidth => "getWidth",
            Self::GetHeight => "getHeight",
            Self::GetSize => "getSize",
            Self::GetPosition => "getPosition",
            Self::GetPositionX => "getPositionX",
            Self::GetPositionY => "getPositionY",
            Self::GetCursorPosition => "getCursorPosition",
            Self::SetSize => "setSize",
            Self::SetPosition => "setPosition",
            Self::SetCursorPosition => "setCursorPosition",
        }
    }

    /// Case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for WindowMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
