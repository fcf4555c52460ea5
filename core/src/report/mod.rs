mod item;
mod render;

pub use item::GradingItem;
pub use render::render_report;
