//! Markdown resume parsing module.

mod entities;
mod fields;
mod markdown_parser;
mod options;
mod patterns;
mod sections;

pub use fields::{
    is_phone, parse_certification_line, parse_contact_line, parse_date, parse_date_range,
    parse_gpa, parse_language_line, parse_link, parse_location, parse_single_date,
    parse_skill_line, split_list,
};
pub use markdown_parser::MarkdownParser;
pub use options::ParseOptions;
pub use patterns::{classify_line, LineKind};
pub use sections::SectionKind;
