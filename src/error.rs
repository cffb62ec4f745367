/// Reason a candidate CPR number was rejected.
///
/// Exactly one reason is reported per rejected input, the first one
/// encountered in pipeline order: structural parsing, then the optional
/// modulus-11 check, then date resolution. The enumeration is closed;
/// callers mapping it must cover every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorReason {
    /// The value was empty or consisted only of white-space.
    #[error("The argument is null, empty or white-space")]
    NullEmptyOrWhiteSpace,

    /// A digit position held a non-digit character.
    #[error("The argument contains non digit characters where digits are expected")]
    NonDigitCharacters,

    /// The separator position held something other than a dash.
    #[error("The argument contains a non dash character where a dash was expected")]
    NonDashCharacter,

    /// The weighted digit sum was not divisible by 11.
    #[error("The modula 11 check failed")]
    Modula11CheckFail,

    /// The trimmed value was neither 10 nor 11 characters long.
    #[error("The length of the trimmed argument is wrong. Only 10 and 11 are accepted")]
    InvalidLength,

    /// The day is not valid for the resolved month and year.
    #[error("The day in the given month is invalid")]
    InvalidDayInMonth,

    /// The month is outside 1..=12.
    #[error("The month is invalid")]
    InvalidMonth,

    /// The year is outside the range the control-code table can produce.
    #[error("The year is invalid")]
    InvalidYear,

    /// The control number is invalid.
    #[error("The control number is invalid")]
    InvalidControl,

    /// The year and control numbers are invalid together.
    #[error("The year and control numbers are invalid")]
    InvalidYearAndControl,

    /// Catch-all for a year/control pair outside the resolution table.
    /// The table is total over parsed input, so this is unreachable in
    /// practice.
    #[error("Argument is invalid")]
    InvalidYearAndControlCombination,
}
