//! Compiled-in fallback dictionary.
//!
//! A small list of common, easy-to-type English nouns used when the caller
//! has not registered a dictionary of its own. Parsed into a [`WordSource`]
//! once on first access.

use std::sync::OnceLock;

use super::WordSource;

/// Number of words in the built-in dictionary.
pub const BUILTIN_WORD_COUNT: usize = 286;

#[rustfmt::skip]
const BUILTIN_WORDS: [&str; BUILTIN_WORD_COUNT] = [
    "acid", "acorn", "actor", "adobe", "agent", "alarm", "album", "alert", "alley", "amber",
    "angle", "ankle", "apple", "april", "apron", "arena", "armor", "arrow", "aspen", "atlas",
    "attic", "audio", "autumn", "avenue", "bacon", "badge", "bagel", "baker", "balmy", "bamboo",
    "banjo", "barley", "basil", "basin", "batch", "beach", "beacon", "bench", "berry", "bison",
    "blade", "blank", "blaze", "bloom", "blues", "board", "bonus", "boost", "booth", "brain",
    "brave", "bread", "brick", "bride", "brook", "broom", "brush", "bucket", "buddy", "bugle",
    "cabin", "cable", "cactus", "camel", "candle", "canoe", "canvas", "cargo", "carpet",
    "carrot", "castle", "cedar", "chalk", "charm", "cherry", "chess", "chief", "chimney",
    "cider", "cinema", "circus", "citrus", "clamp", "cliff", "clock", "cloud", "clover",
    "coast", "cobra", "cocoa", "comet", "copper", "coral", "cotton", "couch", "cougar", "crane",
    "crater", "crayon", "cream", "creek", "crisp", "crown", "cubic", "daisy", "dance", "delta",
    "denim", "depot", "desert", "diary", "dingo", "disco", "dolphin", "donut", "dragon",
    "drift", "drum", "eagle", "easel", "echo", "elbow", "ember", "engine", "equal", "fabric",
    "falcon", "fancy", "fiber", "fiddle", "field", "flame", "flint", "flute", "focus", "forest",
    "fossil", "frost", "fudge", "gadget", "galaxy", "garden", "garlic", "gecko", "giant",
    "ginger", "glacier", "globe", "glove", "goose", "grape", "gravel", "guitar", "hammer",
    "harbor", "hazel", "helmet", "heron", "hiking", "honey", "hornet", "igloo", "island",
    "ivory", "jacket", "jaguar", "jelly", "jigsaw", "jolly", "juice", "jungle", "kayak",
    "kernel", "kettle", "kiwi", "koala", "ladder", "lagoon", "lemon", "lentil", "lilac",
    "limbo", "linen", "lizard", "lobster", "locket", "lotus", "lunar", "magnet", "mango",
    "maple", "marble", "meadow", "melon", "meteor", "mint", "mitten", "mocha", "monkey",
    "mosaic", "motor", "muffin", "nectar", "needle", "noodle", "nugget", "oasis", "ocean",
    "olive", "onion", "opal", "orbit", "orchid", "otter", "oyster", "paddle", "panda", "papaya",
    "parade", "parrot", "pasta", "peach", "pebble", "pepper", "piano", "pickle", "pilot",
    "pixel", "planet", "plaza", "plum", "polar", "pony", "poppy", "puzzle", "quartz", "quill",
    "rabbit", "radar", "radish", "raven", "ribbon", "river", "robin", "rocket", "rodeo",
    "saddle", "salmon", "sandal", "satin", "scarf", "shovel", "silver", "sketch", "slate",
    "sonic", "spiral", "squid", "stamp", "storm", "sugar", "summit", "sunset", "swamp", "tango",
    "teapot", "temple", "thunder", "tiger", "timber", "toast", "tomato", "tulip", "tundra",
    "turtle", "umbrella", "valley", "velvet", "violin", "walnut", "willow", "window", "wizard",
    "yogurt", "zebra", "zipper",
];

static BUILTIN_LOCK: OnceLock<WordSource> = OnceLock::new();

/// Returns the built-in dictionary.
///
/// # Panics
///
/// Panics if the embedded list fails validation (duplicate, non-alphabetic,
/// or too few words), which is a build defect rather than a runtime condition.
#[must_use]
pub fn builtin() -> &'static WordSource {
    BUILTIN_LOCK.get_or_init(|| {
        let source = WordSource::new(BUILTIN_WORDS).expect("built-in dictionary is valid");
        assert!(
            source.len() == BUILTIN_WORD_COUNT,
            "built-in dictionary must contain exactly {BUILTIN_WORD_COUNT} unique words, got {}",
            source.len()
        );
        source
    })
}
