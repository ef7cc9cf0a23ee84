use crate::domain::model::CourseRecord;
use crate::utils::error::{AdvisorError, Result};

/// Split one raw line on `delimiter`, preserving empty fields. The final
/// field is terminated by end of string, so the empty string yields one
/// empty field. No trimming and no quoting: a delimiter inside a field
/// cannot be represented.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_owned).collect()
}

/// Parse one catalog line: field 0 is the course identifier, field 1 the
/// name, any further fields are prerequisite identifiers. `line_number` is
/// 1-based and only used for error reporting.
pub fn parse_record(line: &str, delimiter: char, line_number: usize) -> Result<CourseRecord> {
    let mut fields = split_fields(line, delimiter).into_iter();

    let (Some(identifier), Some(name)) = (fields.next(), fields.next()) else {
        return Err(AdvisorError::MalformedRecord { line: line_number });
    };

    Ok(CourseRecord {
        identifier,
        name,
        prerequisites: fields.collect(),
    })
}
