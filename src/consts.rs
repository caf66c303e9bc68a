/// Filter value that disables month or weekday filtering
pub(crate) const ALL: &str = "all";

/// Number of raw rows shown per page
pub(crate) const PAGE_SIZE: usize = 5;

/// Width of the dashed line closing every statistics block
pub(crate) const SEPARATOR_WIDTH: usize = 40;

/// Affirmative answer for the paging and restart prompts
pub(crate) const YES: &str = "yes";
