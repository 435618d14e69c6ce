use bitflags::bitflags;

bitflags! {
    /// Options selects which normalization stages run before matching. They can be combined
    /// with bitwise operators.
    ///
    /// Lower-casing is not listed, because it always runs.
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(from = "Toggles", into = "Toggles")
    )]
    pub struct Options: u8 {
        /// Strip diacritical marks (accents), e.g. "fóó" becomes "foo".
        const NORMALIZE        = 0b00001;
        /// Turn each tab into a single space.
        const SPACED_TAB       = 0b00010;
        /// Remove zero-width spaces (U+200B) outright.
        const ZERO_WIDTH       = 0b00100;
        /// Trim surrounding whitespace, and remove internal runs of two or more whitespace
        /// characters entirely, e.g. "a  b" becomes "ab".
        const MULTI_WHITESPACE = 0b01000;
        /// Also search the message with all spaces removed, e.g. "f o o" is seen as "foo".
        ///
        /// More expensive and more prone to false positives, hence off by default.
        const SPACED_BYPASS    = 0b10000;

        /// Every stage that rewrites the message.
        const ALL_NORMALIZATION = Self::NORMALIZE.bits
            | Self::SPACED_TAB.bits
            | Self::ZERO_WIDTH.bits
            | Self::MULTI_WHITESPACE.bits;
    }
}

impl Options {
    /// Returns `true` if and only if every option in `other` is enabled.
    pub fn is(self, other: Self) -> bool {
        self.contains(other)
    }

    /// Logical opposite of `Self::is`.
    pub fn isnt(self, other: Self) -> bool {
        !self.contains(other)
    }
}

impl Default for Options {
    /// Every normalization stage, but no spaced bypass.
    fn default() -> Self {
        Self::ALL_NORMALIZATION
    }
}

/// Human-friendly form of `Options` for configuration files. Missing fields take their
/// default.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct Toggles {
    normalize: bool,
    spaced_tab: bool,
    zero_width: bool,
    multi_whitespace: bool,
    spaced_bypass: bool,
}

#[cfg(feature = "serde")]
impl Default for Toggles {
    fn default() -> Self {
        Options::default().into()
    }
}

#[cfg(feature = "serde")]
impl From<Options> for Toggles {
    fn from(options: Options) -> Self {
        Self {
            normalize: options.is(Options::NORMALIZE),
            spaced_tab: options.is(Options::SPACED_TAB),
            zero_width: options.is(Options::ZERO_WIDTH),
            multi_whitespace: options.is(Options::MULTI_WHITESPACE),
            spaced_bypass: options.is(Options::SPACED_BYPASS),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Toggles> for Options {
    fn from(toggles: Toggles) -> Self {
        let mut options = Options::empty();
        options.set(Options::NORMALIZE, toggles.normalize);
        options.set(Options::SPACED_TAB, toggles.spaced_tab);
        options.set(Options::ZERO_WIDTH, toggles.zero_width);
        options.set(Options::MULTI_WHITESPACE, toggles.multi_whitespace);
        options.set(Options::SPACED_BYPASS, toggles.spaced_bypass);
        options
    }
}
