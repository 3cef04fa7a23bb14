//! Prompt and placeholder text chosen from the viewport width.

/// Below this width (in pixels) only a bare `$` fits.
pub const SMALL_BREAKPOINT: u32 = 320;
/// Below this width the `~` is dropped.
pub const MEDIUM_BREAKPOINT: u32 = 480;
/// Nominal pixel width of one terminal cell when the terminal does not
/// report pixel sizes.
pub const NOMINAL_CELL_WIDTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSize {
    Small,
    Medium,
    Large,
}

impl ScreenSize {
    pub fn from_width(width: u32) -> Self {
        if width < SMALL_BREAKPOINT {
            ScreenSize::Small
        } else if width < MEDIUM_BREAKPOINT {
            ScreenSize::Medium
        } else {
            ScreenSize::Large
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ScreenSize::Small => "help",
            ScreenSize::Medium => "Type 'help'",
            ScreenSize::Large => "Type 'help' for commands",
        }
    }
}

/// Viewport width in pixels from a terminal's cell and pixel sizes.
///
/// Terminals that report no pixel size give zero, in which case the
/// column count is scaled by [`NOMINAL_CELL_WIDTH`].
pub fn viewport_width(columns: u16, pixel_width: u16) -> u32 {
    if pixel_width > 0 {
        u32::from(pixel_width)
    } else {
        u32::from(columns) * NOMINAL_CELL_WIDTH
    }
}

/// `user@host` identity a console prompts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub user: String,
    pub host: String,
}

impl PromptSet {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    pub fn prompt(&self, size: ScreenSize) -> String {
        match size {
            ScreenSize::Small => "$".to_string(),
            ScreenSize::Medium => format!("{}@{} %", self.user, self.host),
            ScreenSize::Large => format!("{}@{} ~ %", self.user, self.host),
        }
    }
}
