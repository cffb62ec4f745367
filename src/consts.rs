/// Length of a canonical CPR number (digits only)
pub const CANONICAL_LENGTH: usize = 10;

/// Length of a CPR number written with the separator after the date part
pub const SEPARATED_LENGTH: usize = 11;

/// Separator between the date part and the control code
pub const SEPARATOR: char = '-';

/// Zero-based position of the separator in an 11-character number
pub const SEPARATOR_INDEX: usize = 6;

/// Component separator in ISO formatted dates
pub const DATE_SEPARATOR: char = '-';

/// Per-position weights for the modulus-11 checksum (leftmost digit first)
pub const MODULA11_WEIGHTS: [u32; 10] = [4, 3, 2, 7, 6, 5, 4, 3, 2, 1];

/// Divisor of the modulus-11 checksum
pub const MODULA11_DIVISOR: u32 = 11;

/// Offset added to the day-of-month to encode an administrative correction
pub const DAY_REPAIR_OFFSET: u8 = 60;

/// Earliest birth year the control-code table can resolve (1800 + 58)
pub const MIN_YEAR: u16 = 1858;

/// Latest birth year the control-code table can resolve (2000 + 57)
pub const MAX_YEAR: u16 = 2057;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
