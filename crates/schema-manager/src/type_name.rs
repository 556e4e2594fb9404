//! Type-reference string parsing.

/// Parsed form of a type reference: the bare name plus an array flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTypeName<'a> {
    pub name: &'a str,
    pub is_array: bool,
}

/// Split the `[]` array suffix off a type reference.
///
/// Pure and total: any string parses, unsuffixed names pass through
/// unchanged.
///
/// ```
/// use schema_manager::parse_type_name;
///
/// assert_eq!(parse_type_name("String[]").name, "String");
/// assert!(parse_type_name("String[]").is_array);
/// assert!(!parse_type_name("String").is_array);
/// ```
pub fn parse_type_name(type_ref: &str) -> ParsedTypeName<'_> {
    match type_ref.strip_suffix("[]") {
        Some(name) => ParsedTypeName {
            name,
            is_array: true,
        },
        None => ParsedTypeName {
            name: type_ref,
            is_array: false,
        },
    }
}
