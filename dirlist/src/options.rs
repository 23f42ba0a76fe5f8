/// How each entry of a directory is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Names separated by spaces on a single line.
    Plain,
    /// One detailed line per entry, preceded by a `total` block count.
    Long,
    /// `<name> <bytes>` per line.
    Size,
}

impl OutputMode {
    /// Size output takes precedence over long output, which takes precedence
    /// over plain output.
    pub fn resolve(long: bool, size: bool) -> OutputMode {
        if size {
            OutputMode::Size
        } else if long {
            OutputMode::Long
        } else {
            OutputMode::Plain
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Case-insensitive by name.
    Name,
    /// Most recently modified first.
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub mode: OutputMode,
    pub sort: SortOrder,
    pub show_hidden: bool,
    pub recursive: bool,
    pub human_readable: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            mode: OutputMode::Plain,
            sort: SortOrder::Name,
            show_hidden: false,
            recursive: false,
            human_readable: false,
        }
    }
}

impl ListOptions {
    /// Options for a directory reached by recursive descent: hidden entries
    /// are always filtered there, whatever the top level asked for.
    pub fn for_subdirectory(&self) -> ListOptions {
        ListOptions {
            show_hidden: false,
            ..*self
        }
    }
}
