pub mod normalize;
pub mod years;

pub use normalize::{fold_char, normalize, slugify};
pub use years::{decade_label, year_tokens, UNKNOWN_DECADE};
