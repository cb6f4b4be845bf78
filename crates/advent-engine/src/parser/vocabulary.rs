//! Word lookup.

use std::collections::HashMap;

use serde::Serialize;

/// Grammatical class of a vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WordClass {
    /// Moves the player.
    Motion,
    /// Names an object.
    Object,
    /// Names an action.
    Verb,
    /// Prints a canned message.
    Message,
}

impl WordClass {
    fn from_digit(digit: u16) -> Option<Self> {
        match digit {
            0 => Some(Self::Motion),
            1 => Some(Self::Object),
            2 => Some(Self::Verb),
            3 => Some(Self::Message),
            _ => None,
        }
    }
}

/// A classified word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Word {
    /// The word's class.
    pub class: WordClass,
    /// Code within the class.
    pub code: u16,
}

/// Words the game knows, as `class * 1000 + code`.
const WORDS: &[(&str, u16)] = &[
    // Motions
    ("road", 2),
    ("hill", 2),
    ("enter", 3),
    ("upstream", 4),
    ("downstream", 5),
    ("forest", 6),
    ("forward", 7),
    ("continue", 7),
    ("onward", 7),
    ("back", 8),
    ("return", 8),
    ("retreat", 8),
    ("valley", 9),
    ("stairs", 10),
    ("staircase", 10),
    ("out", 11),
    ("outside", 11),
    ("exit", 11),
    ("leave", 11),
    ("building", 12),
    ("house", 12),
    ("gully", 13),
    ("stream", 14),
    ("rock", 15),
    ("bed", 16),
    ("crawl", 17),
    ("cobble", 18),
    ("cobbles", 18),
    ("inward", 19),
    ("inside", 19),
    ("in", 19),
    ("surface", 20),
    ("null", 21),
    ("nowhere", 21),
    ("dark", 22),
    ("passage", 23),
    ("tunnel", 23),
    ("low", 24),
    ("canyon", 25),
    ("awkward", 26),
    ("giant", 27),
    ("view", 28),
    ("up", 29),
    ("u", 29),
    ("upward", 29),
    ("above", 29),
    ("ascend", 29),
    ("down", 30),
    ("d", 30),
    ("downward", 30),
    ("descend", 30),
    ("pit", 31),
    ("outdoors", 32),
    ("crack", 33),
    ("steps", 34),
    ("dome", 35),
    ("left", 36),
    ("right", 37),
    ("hall", 38),
    ("jump", 39),
    ("barren", 40),
    ("over", 41),
    ("across", 42),
    ("east", 43),
    ("e", 43),
    ("west", 44),
    ("w", 44),
    ("north", 45),
    ("n", 45),
    ("south", 46),
    ("s", 46),
    ("ne", 47),
    ("northeast", 47),
    ("se", 48),
    ("southeast", 48),
    ("sw", 49),
    ("southwest", 49),
    ("nw", 50),
    ("northwest", 50),
    ("debris", 51),
    ("hole", 52),
    ("wall", 53),
    ("broken", 54),
    ("y2", 55),
    ("climb", 56),
    ("look", 57),
    ("l", 57),
    ("examine", 57),
    ("touch", 57),
    ("describe", 57),
    ("floor", 58),
    ("room", 59),
    ("slit", 60),
    ("slab", 61),
    ("slabroom", 61),
    ("xyzzy", 62),
    ("depression", 63),
    ("entrance", 64),
    ("plugh", 65),
    ("secret", 66),
    ("cave", 67),
    ("cross", 69),
    ("bedquilt", 70),
    ("plover", 71),
    ("oriental", 72),
    ("cavern", 73),
    ("shell", 74),
    ("reservoir", 75),
    ("office", 76),
    ("main", 76),
    ("fork", 77),
    // Objects
    ("keys", 1001),
    ("key", 1001),
    ("lamp", 1002),
    ("lantern", 1002),
    ("headlamp", 1002),
    ("grate", 1003),
    ("cage", 1004),
    ("rod", 1005),
    ("bird", 1008),
    ("door", 1009),
    ("pillow", 1010),
    ("velvet", 1010),
    ("snake", 1011),
    ("fissure", 1012),
    ("tablet", 1013),
    ("clam", 1014),
    ("oyster", 1015),
    ("magazine", 1016),
    ("issue", 1016),
    ("spelunker", 1016),
    ("dwarf", 1017),
    ("dwarves", 1017),
    ("knife", 1018),
    ("knives", 1018),
    ("food", 1019),
    ("rations", 1019),
    ("bottle", 1020),
    ("jar", 1020),
    ("water", 1021),
    ("h2o", 1021),
    ("oil", 1022),
    ("mirror", 1023),
    ("plant", 1024),
    ("beanstalk", 1024),
    ("stalactite", 1026),
    ("shadow", 1027),
    ("figure", 1027),
    ("axe", 1028),
    ("drawings", 1029),
    ("pirate", 1030),
    ("dragon", 1031),
    ("chasm", 1032),
    ("troll", 1033),
    ("bear", 1035),
    ("message", 1036),
    ("volcano", 1037),
    ("geyser", 1037),
    ("machine", 1038),
    ("vending", 1038),
    ("batteries", 1039),
    ("battery", 1039),
    ("carpet", 1040),
    ("moss", 1040),
    ("gold", 1050),
    ("nugget", 1050),
    ("diamonds", 1051),
    ("diamond", 1051),
    ("silver", 1052),
    ("bars", 1052),
    ("jewelry", 1053),
    ("jewels", 1053),
    ("coins", 1054),
    ("chest", 1055),
    ("box", 1055),
    ("treasure", 1055),
    ("eggs", 1056),
    ("egg", 1056),
    ("nest", 1056),
    ("trident", 1057),
    ("vase", 1058),
    ("ming", 1058),
    ("shards", 1058),
    ("pottery", 1058),
    ("emerald", 1059),
    ("platinum", 1060),
    ("pyramid", 1060),
    ("pearl", 1061),
    ("rug", 1062),
    ("persian", 1062),
    ("spices", 1063),
    ("chain", 1064),
    // Verbs
    ("take", 2001),
    ("carry", 2001),
    ("keep", 2001),
    ("catch", 2001),
    ("capture", 2001),
    ("steal", 2001),
    ("get", 2001),
    ("tote", 2001),
    ("drop", 2002),
    ("release", 2002),
    ("free", 2002),
    ("discard", 2002),
    ("dump", 2002),
    ("say", 2003),
    ("chant", 2003),
    ("sing", 2003),
    ("utter", 2003),
    ("mumble", 2003),
    ("unlock", 2004),
    ("open", 2004),
    ("nothing", 2005),
    ("lock", 2006),
    ("close", 2006),
    ("light", 2007),
    ("on", 2007),
    ("extinguish", 2008),
    ("off", 2008),
    ("wave", 2009),
    ("shake", 2009),
    ("swing", 2009),
    ("calm", 2010),
    ("placate", 2010),
    ("tame", 2010),
    ("walk", 2011),
    ("run", 2011),
    ("travel", 2011),
    ("go", 2011),
    ("proceed", 2011),
    ("explore", 2011),
    ("goto", 2011),
    ("follow", 2011),
    ("turn", 2011),
    ("attack", 2012),
    ("kill", 2012),
    ("fight", 2012),
    ("hit", 2012),
    ("strike", 2012),
    ("slay", 2012),
    ("pour", 2013),
    ("eat", 2014),
    ("devour", 2014),
    ("drink", 2015),
    ("rub", 2016),
    ("throw", 2017),
    ("toss", 2017),
    ("quit", 2018),
    ("find", 2019),
    ("where", 2019),
    ("inventory", 2020),
    ("inv", 2020),
    ("i", 2020),
    ("feed", 2021),
    ("fill", 2022),
    ("blast", 2023),
    ("detonate", 2023),
    ("ignite", 2023),
    ("blowup", 2023),
    ("score", 2024),
    ("fee", 2025),
    ("fie", 2025),
    ("foe", 2025),
    ("foo", 2025),
    ("fum", 2025),
    ("brief", 2026),
    ("read", 2027),
    ("peruse", 2027),
    ("break", 2028),
    ("shatter", 2028),
    ("smash", 2028),
    ("wake", 2029),
    ("disturb", 2029),
    ("suspend", 2030),
    ("pause", 2030),
    ("save", 2030),
    ("hours", 2031),
    // Messages
    ("abra", 3050),
    ("abracadabra", 3050),
    ("sesame", 3050),
    ("shazam", 3050),
    ("hocus", 3050),
    ("pocus", 3050),
    ("help", 3051),
    ("?", 3051),
    ("tree", 3064),
    ("trees", 3064),
    ("dig", 3066),
    ("excavate", 3066),
    ("lost", 3068),
    ("mist", 3069),
    ("stop", 3139),
    ("info", 3142),
    ("information", 3142),
    ("swim", 3147),
];

/// The magic words, in the order they must be spoken.
const INCANTATION: [&str; 5] = ["fee", "fie", "foe", "foo", "fum"];

/// Case-insensitive word table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: HashMap<&'static str, Word>,
}

impl Vocabulary {
    /// The game's built-in vocabulary.
    pub fn builtin() -> Self {
        Self::from_entries(WORDS)
    }

    /// Build a vocabulary from `(word, class * 1000 + code)` entries.
    ///
    /// Entries with an unknown class digit are skipped; later duplicates win.
    pub fn from_entries(entries: &[(&'static str, u16)]) -> Self {
        let words = entries
            .iter()
            .filter_map(|&(text, value)| {
                let class = WordClass::from_digit(value / 1000)?;
                Some((
                    text,
                    Word {
                        class,
                        code: value % 1000,
                    },
                ))
            })
            .collect();
        Self { words }
    }

    /// Classify a word. Lookup ignores case.
    pub fn classify(&self, word: &str) -> Option<Word> {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.get(word.to_lowercase().as_str()).copied()
        } else {
            self.words.get(word).copied()
        }
    }

    /// Position of a magic word in the fee-fie-foe-foo sequence, from 1.
    pub fn incantation_step(&self, word: &str) -> Option<u8> {
        let word = word.to_lowercase();
        INCANTATION
            .iter()
            .position(|&w| w == word)
            .map(|i| i as u8 + 1)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no words are known.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_class() {
        let vocab = Vocabulary::builtin();
        assert_eq!(
            vocab.classify("north"),
            Some(Word {
                class: WordClass::Motion,
                code: 45
            })
        );
        assert_eq!(
            vocab.classify("lantern"),
            Some(Word {
                class: WordClass::Object,
                code: 2
            })
        );
        assert_eq!(
            vocab.classify("get"),
            Some(Word {
                class: WordClass::Verb,
                code: 1
            })
        );
        assert_eq!(
            vocab.classify("help"),
            Some(Word {
                class: WordClass::Message,
                code: 51
            })
        );
    }

    #[test]
    fn lookup_ignores_case() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.classify("XYZZY"), vocab.classify("xyzzy"));
        assert!(vocab.classify("Lamp").is_some());
    }

    #[test]
    fn unknown_words() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.classify("frobozz"), None);
        assert_eq!(vocab.classify(""), None);
        assert_eq!(vocab.classify("lam"), None);
    }

    #[test]
    fn incantation_steps() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.incantation_step("fee"), Some(1));
        assert_eq!(vocab.incantation_step("FOO"), Some(4));
        assert_eq!(vocab.incantation_step("fum"), Some(5));
        assert_eq!(vocab.incantation_step("lamp"), None);
    }

    #[test]
    fn every_word_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for (word, _) in WORDS {
            assert!(seen.insert(*word), "duplicate word {word}");
        }
        assert_eq!(Vocabulary::builtin().len(), WORDS.len());
    }

    #[test]
    fn unknown_class_digit_is_skipped() {
        let vocab = Vocabulary::from_entries(&[("ok", 2001), ("bad", 9001)]);
        assert_eq!(vocab.len(), 1);
        assert!(!vocab.is_empty());
    }
}
