//! HTTP status phrases as documented by Danbooru-family installations.
//!
//! The sites use a few non-standard codes in the 4xx range (420, 421, ...)
//! with their own meanings, so this table takes precedence over the generic
//! reason phrases of the status codes.

pub(crate) fn describe(code: u16) -> Option<(&'static str, &'static str)> {
    Some(match code {
        200 => ("OK", "Request was successful"),
        403 => ("Forbidden", "Access denied"),
        404 => ("Not Found", "Not found"),
        420 => ("Invalid Record", "Record could not be saved"),
        421 => ("User Throttled", "User is throttled, try again later"),
        422 => ("Locked", "The resource is locked and cannot be modified"),
        423 => ("Already Exists", "Resource already exists"),
        424 => ("Invalid Parameters", "The given parameters were invalid"),
        500 => (
            "Internal Server Error",
            "Some unknown error occurred on the server",
        ),
        503 => (
            "Service Unavailable",
            "Server cannot currently handle the request",
        ),
        _ => return None,
    })
}
