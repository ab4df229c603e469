mod properties;
mod scenarios;

/// Every letter of the Ukrainian alphabet, upper and lower case.
pub(super) const UKRAINIAN_ALPHABET: &str =
    "АБВГҐДЕЄЖЗИІЇЙКЛМНОПРСТУФХЦЧШЩЬЮЯабвгґдеєжзиіїйклмнопрстуфхцчшщьюя";
