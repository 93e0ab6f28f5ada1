pub mod commands;
pub mod resort;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use commands::{LineDash, RenderCommand, TextAlign};
pub use resort::{Difficulty, Lift, LiftKind, LiftStatus, MapMeta, ResortMap};
pub use shared_str::SharedStr;
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport};
