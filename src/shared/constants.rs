//! User-facing response copy shared across handlers.

/// Message returned when the subject line carries no usable reference ID.
pub const INVALID_SUBJECT_MESSAGE: &str =
    "The email subject does not contain a valid reference ID.";

/// Detail text explaining the accepted subject line formats.
pub const INVALID_SUBJECT_DETAIL: &str = "Email subject lines must match one of the following two, case-insensitive, formats: 'Reference ID: REF_ID' or 'Ref ID: REF_ID'. REF_ID is a 14 character string. It can contain lower and uppercase letters from A to Z (inclusive), and any digit between 0 and 9 (inclusive).";
