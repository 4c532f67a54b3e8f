pub const DEFAULT_PAGE_COUNT: u32 = 10;

/// Offset/limit pair handed to the stores' list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: u32,
    pub count: u32,
}

/// Fills absent bounds. Values that are present are passed through untouched.
pub fn resolve(start: Option<u32>, count: Option<u32>) -> Page {
    Page {
        start: start.unwrap_or(0),
        count: count.unwrap_or(DEFAULT_PAGE_COUNT),
    }
}
