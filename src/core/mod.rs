pub mod format;
pub mod scale;
pub mod series;
pub mod types;

pub use format::{
    format_currency, format_fixed2, format_js_number, format_percentage, format_percentage_tick,
};
pub use scale::LinearScale;
pub use series::{Series, decode_payload};
pub use types::Viewport;
