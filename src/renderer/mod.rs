//! Software rendering
//!
//! The compositor turns committed layer positions into a row-major pixel
//! stream; `FrameBuffer` is an in-memory display that receives it.

pub mod compositor;
pub mod framebuffer;

pub use compositor::{
    SCREEN, commit, draw_scores, render_all, render_moved, render_region, resolve_color,
    score_text,
};
pub use framebuffer::FrameBuffer;
