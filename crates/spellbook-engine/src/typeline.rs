//! Type line classification.
//!
//! A type line like `"Legendary Creature — Human Wizard // Instant — Adventure"`
//! is split into supertypes, card types and subtypes by matching each token
//! against fixed vocabularies. Tokens that match nothing are reported back so
//! the caller can warn about them; the source data is not always consistent
//! and unknown types must never stop a card from being modeled.

use std::collections::BTreeSet;

use crate::layout::CardLayout;

/// Supertypes.
pub const SUPERTYPES: &[&str] = &[
    "Basic", "Legendary", "Ongoing", "Snow", "World", "Elite", "Host",
];

/// Card types.
pub const CARD_TYPES: &[&str] = &[
    "Artifact",
    "Battle",
    "Conspiracy",
    "Creature",
    "Dungeon",
    "Enchantment",
    "Instant",
    "Kindred",
    "Land",
    "Phenomenon",
    "Plane",
    "Planeswalker",
    "Scheme",
    "Sorcery",
    "Tribal",
    "Vanguard",
];

const ARTIFACT_SUBTYPES: &[&str] = &[
    "Attraction",
    "Blood",
    "Bobblehead",
    "Clue",
    "Contraption",
    "Equipment",
    "Food",
    "Fortification",
    "Gold",
    "Incubator",
    "Junk",
    "Map",
    "Powerstone",
    "Treasure",
    "Vehicle",
];

const ENCHANTMENT_SUBTYPES: &[&str] = &[
    "Aura", "Background", "Cartouche", "Case", "Curse", "Role", "Room", "Rune", "Shard",
    "Shrine",
];

const LAND_SUBTYPES: &[&str] = &[
    "Cave",
    "Desert",
    "Forest",
    "Gate",
    "Island",
    "Lair",
    "Locus",
    "Mine",
    "Mountain",
    "Plains",
    "Power-Plant",
    "Sphere",
    "Swamp",
    "Tower",
    "Urza's",
];

const SPELL_SUBTYPES: &[&str] = &["Arcane", "Lesson", "Trap", "Omen"];

const BATTLE_SUBTYPES: &[&str] = &["Siege"];

const PLANESWALKER_SUBTYPES: &[&str] = &[
    "Ajani", "Aminatou", "Angrath", "Arlinn", "Ashiok", "Bahamut", "Basri", "Bolas", "Calix",
    "Chandra", "Comet", "Dack", "Dakkon", "Daretti", "Davriel", "Dihada", "Domri", "Dovin",
    "Ellywick", "Elminster", "Elspeth", "Estrid", "Freyalise", "Garruk", "Gideon", "Grist",
    "Guff", "Huatli", "Jace", "Jared", "Jaya", "Jeska", "Kaito", "Karn", "Kasmina", "Kaya",
    "Kiora", "Koth", "Liliana", "Lolth", "Lukka", "Minsc", "Mordenkainen", "Nahiri", "Narset",
    "Niko", "Nissa", "Nixilis", "Oko", "Quintorius", "Ral", "Rowan", "Saheeli", "Samut",
    "Sarkhan", "Serra", "Sivitri", "Sorin", "Szat", "Tamiyo", "Tasha", "Teferi", "Teyo",
    "Tezzeret", "Tibalt", "Tyvar", "Ugin", "Urza", "Venser", "Vivien", "Vraska", "Vronos",
    "Will", "Windgrace", "Wrenn", "Xenagos", "Yanggu", "Yanling", "Zariel",
];

const CREATURE_SUBTYPES: &[&str] = &[
    "Advisor", "Aetherborn", "Alien", "Ally", "Angel", "Antelope", "Ape", "Archer", "Archon",
    "Armadillo", "Army", "Artificer", "Assassin", "Assembly-Worker", "Astartes", "Atog",
    "Aurochs", "Avatar", "Azra", "Badger", "Balloon", "Barbarian", "Bard", "Basilisk", "Bat",
    "Bear", "Beast", "Beaver", "Beeble", "Beholder", "Berserker", "Bird", "Blinkmoth", "Boar",
    "Bringer", "Brushwagg", "Camarid", "Camel", "Capybara", "Caribou", "Carrier", "Cat",
    "Centaur", "Child", "Chimera", "Citizen", "Cleric", "Clown", "Cockatrice", "Construct",
    "Coward", "Coyote", "Crab", "Crocodile", "C'tan", "Custodes", "Cyberman", "Cyclops",
    "Dalek", "Dauthi", "Demigod", "Demon", "Deserter", "Detective", "Devil", "Dinosaur",
    "Djinn", "Doctor", "Dog", "Dragon", "Drake", "Dreadnought", "Drone", "Druid", "Dryad",
    "Dwarf", "Efreet", "Egg", "Elder", "Eldrazi", "Elemental", "Elephant", "Elf", "Elk",
    "Employee", "Eye", "Faerie", "Ferret", "Fish", "Flagbearer", "Fox", "Fractal", "Frog",
    "Fungus", "Gamer", "Gargoyle", "Germ", "Giant", "Gith", "Gnoll", "Gnome", "Goat",
    "Goblin", "God", "Golem", "Gorgon", "Graveborn", "Gremlin", "Griffin", "Guest", "Hag",
    "Halfling", "Hamster", "Harpy", "Hellion", "Hippo", "Hippogriff", "Homarid", "Homunculus",
    "Horror", "Horse", "Human", "Hydra", "Hyena", "Illusion", "Imp", "Incarnation", "Inkling",
    "Inquisitor", "Insect", "Jackal", "Jellyfish", "Juggernaut", "Kavu", "Kirin", "Kithkin",
    "Knight", "Kobold", "Kor", "Kraken", "Llama", "Lamia", "Lammasu", "Leech", "Leviathan",
    "Lhurgoyf", "Licid", "Lizard", "Lord", "Manticore", "Masticore", "Mercenary", "Merfolk",
    "Metathran", "Minion", "Minotaur", "Mite", "Mole", "Monger", "Mongoose", "Monk", "Monkey",
    "Moonfolk", "Mount", "Mouse", "Mutant", "Myr", "Mystic", "Nautilus", "Necron", "Nephilim",
    "Nightmare", "Nightstalker", "Ninja", "Noble", "Noggle", "Nomad", "Nymph", "Octopus",
    "Ogre", "Ooze", "Orb", "Orc", "Orgg", "Otter", "Ouphe", "Ox", "Oyster", "Pangolin",
    "Peasant", "Pegasus", "Pentavite", "Performer", "Pest", "Phelddagrif", "Phoenix",
    "Phyrexian", "Pilot", "Pincher", "Pirate", "Plant", "Porcupine", "Possum", "Praetor",
    "Primarch", "Prism", "Processor", "Rabbit", "Raccoon", "Ranger", "Rat", "Rebel",
    "Reflection", "Rhino", "Rigger", "Robot", "Rogue", "Sable", "Salamander", "Samurai",
    "Sand", "Saproling", "Satyr", "Scarecrow", "Scientist", "Scion", "Scorpion", "Scout",
    "Sculpture", "Serf", "Serpent", "Servo", "Shade", "Shaman", "Shapeshifter", "Shark",
    "Sheep", "Siren", "Skeleton", "Skunk", "Slith", "Sliver", "Sloth", "Slug", "Snail",
    "Snake", "Soldier", "Soltari", "Spawn", "Specter", "Spellshaper", "Sphinx", "Spider",
    "Spike", "Spirit", "Splinter", "Sponge", "Squid", "Squirrel", "Starfish", "Surrakar",
    "Survivor", "Synth", "Tentacle", "Tetravite", "Thalakos", "Thopter", "Thrull", "Tiefling",
    "Time", "Toy", "Treefolk", "Trilobite", "Triskelavite", "Troll", "Turtle", "Tyranid",
    "Unicorn", "Vampire", "Varmint", "Vedalken", "Volver", "Wall", "Walrus", "Warlock",
    "Warrior", "Weasel", "Weird", "Werewolf", "Whale", "Wizard", "Wolf", "Wolverine",
    "Wombat", "Worm", "Wraith", "Wurm", "Yeti", "Zombie", "Zubera",
];

/// Tokens that separate parts of a type line rather than name a type.
const SEPARATORS: &[&str] = &["—", "-", "//"];

/// Subtype vocabularies that apply to every layout.
const COMMON_SUBTYPES: &[&[&str]] = &[
    ARTIFACT_SUBTYPES,
    ENCHANTMENT_SUBTYPES,
    LAND_SUBTYPES,
    SPELL_SUBTYPES,
    BATTLE_SUBTYPES,
    PLANESWALKER_SUBTYPES,
    CREATURE_SUBTYPES,
];

/// Subtypes that only occur on cards of one layout family.
fn layout_subtypes(layout: CardLayout) -> &'static [&'static str] {
    match layout {
        CardLayout::Adventure => &["Adventure"],
        CardLayout::Class => &["Class"],
        // Sagas that transform keep the subtype on their front face.
        CardLayout::Saga | CardLayout::Transform => &["Saga"],
        _ => &[],
    }
}

/// Whether `token` is a subtype for cards of `layout`.
pub fn is_subtype(layout: CardLayout, token: &str) -> bool {
    COMMON_SUBTYPES
        .iter()
        .chain(std::iter::once(&layout_subtypes(layout)))
        .any(|vocabulary| vocabulary.contains(&token))
}

/// A type line split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeBreakdown {
    /// Every type token of the line.
    pub all: BTreeSet<String>,
    pub supertypes: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub subtypes: BTreeSet<String>,
    /// Tokens that fit no vocabulary.
    pub unclassified: BTreeSet<String>,
}

impl TypeBreakdown {
    /// Whether every token was classified.
    pub fn is_complete(&self) -> bool {
        self.unclassified.is_empty()
    }
}

/// Break a type line into supertypes, types and subtypes.
pub fn classify(type_line: &str, layout: CardLayout) -> TypeBreakdown {
    let mut breakdown = TypeBreakdown::default();

    for token in type_line.split_whitespace() {
        if SEPARATORS.contains(&token) {
            continue;
        }

        breakdown.all.insert(token.to_string());

        if SUPERTYPES.contains(&token) {
            breakdown.supertypes.insert(token.to_string());
        } else if CARD_TYPES.contains(&token) {
            breakdown.types.insert(token.to_string());
        } else if is_subtype(layout, token) {
            breakdown.subtypes.insert(token.to_string());
        } else {
            breakdown.unclassified.insert(token.to_string());
        }
    }

    breakdown
}
