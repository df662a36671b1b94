//! Every line of festival dialogue, in one place.

pub const MAYOR_NAME: &str = "Mayor Tilden";
pub const MERCHANT_NAME: &str = "Merchant Peng";

pub const WELCOME_LINES: &[&str] = &[
    "Welcome to the Lantern Festival! Happy New Year!",
    "Feel free to explore and chat with everyone.",
    "You can visit the colorful tent to change outfits!",
    "Come back when you're ready to light the fireworks!",
];

pub const CHOICE_PROMPT: &str = "Ready to start the fireworks show?";
pub const CHOICE_YES: &str = "Let's do it!";
pub const CHOICE_NO: &str = "Not yet";

pub const OPENING_SPEECH: &str =
    "Everyone, let's welcome the new year together! Now... light the fireworks!";

pub const FINALE_LINE: &str =
    "Happy New Year! May the coming year bring prosperity and happiness to us all!";

pub const FLAVOR_LINE: &str = "What a spectacular fireworks show! Happy New Year!";

pub const STALL_GREETING: &str = "Welcome! Check out our festival goods!";
