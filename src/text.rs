use crate::ErrorReason;

/// Output language for human readable error texts.
///
/// Always passed explicitly; the crate holds no default-language state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Danish,
}

impl ErrorReason {
    /// Returns the human readable text for this reason in the requested
    /// language. English texts match the `Display` output.
    pub const fn text(self, language: Language) -> &'static str {
        match language {
            Language::English => english(self),
            Language::Danish => danish(self),
        }
    }
}

const fn english(error: ErrorReason) -> &'static str {
    match error {
        ErrorReason::NullEmptyOrWhiteSpace => "The argument is null, empty or white-space",
        ErrorReason::NonDigitCharacters => {
            "The argument contains non digit characters where digits are expected"
        }
        ErrorReason::NonDashCharacter => {
            "The argument contains a non dash character where a dash was expected"
        }
        ErrorReason::Modula11CheckFail => "The modula 11 check failed",
        ErrorReason::InvalidLength => {
            "The length of the trimmed argument is wrong. Only 10 and 11 are accepted"
        }
        ErrorReason::InvalidDayInMonth => "The day in the given month is invalid",
        ErrorReason::InvalidMonth => "The month is invalid",
        ErrorReason::InvalidYear => "The year is invalid",
        ErrorReason::InvalidControl => "The control number is invalid",
        ErrorReason::InvalidYearAndControl => "The year and control numbers are invalid",
        ErrorReason::InvalidYearAndControlCombination => "Argument is invalid",
    }
}

const fn danish(error: ErrorReason) -> &'static str {
    match error {
        ErrorReason::NullEmptyOrWhiteSpace => {
            "Argumentet er enten null, tomt eller indeholder \"white-space\""
        }
        ErrorReason::NonDigitCharacters => {
            "Argumentet indeholder bogstaver, der ikke er cifre, hvor disse er forventede"
        }
        ErrorReason::NonDashCharacter => {
            "Argumentet indeholder et bogstav, der ikke er en binde-streg, hvor dette er forventet"
        }
        ErrorReason::Modula11CheckFail => "Modula-11 tjekket fejlede",
        ErrorReason::InvalidLength => {
            "Længden af det \"trimmede\" argument er forkert. Efter at mellemrum er fjernet i starten og slutningen, skal længden af det tilbageværende, være enten 10 eller 11 bogstaver"
        }
        ErrorReason::InvalidDayInMonth => "Dagen i månedet er ikke validt",
        ErrorReason::InvalidMonth => "Måneden er ikke valid",
        ErrorReason::InvalidYear => "Året er ikke validt",
        ErrorReason::InvalidControl => "Kontrol-nummeret er ikke validt",
        ErrorReason::InvalidYearAndControl => {
            "Kombinationen af år og kontrol-nummer er ikke valid"
        }
        ErrorReason::InvalidYearAndControlCombination => "Argumentet er ikke validt",
    }
}
