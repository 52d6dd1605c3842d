use crate::locale::Locale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the title banner.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops banner, headers and gauges,
    /// 2 prints the summary line only.
    pub quiet: u8,
    /// Language for every piece of user-facing text.
    pub locale: Locale,
    pub format: OutputFormat,
}
