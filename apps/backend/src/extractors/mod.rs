pub mod name_segment;
pub mod validated_json;

pub use name_segment::{decode_segment, encode_segment};
pub use validated_json::ValidatedJson;
