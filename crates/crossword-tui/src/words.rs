//! Built-in themed word lists with clues, used as the offline word source.

use crossword_core::{ClueSource, SourceError, WordSource};
use std::collections::HashMap;

type Entry = (&'static str, &'static str);

const ANIMALS: &[Entry] = &[
    ("TIGER", "Striped big cat"),
    ("ZEBRA", "Striped horse of the savanna"),
    ("EAGLE", "Bird on many national seals"),
    ("OTTER", "River swimmer that floats on its back"),
    ("HERON", "Long-legged wading bird"),
    ("RAVEN", "Poe's nevermore bird"),
    ("CAMEL", "Desert animal with a hump"),
    ("HORSE", "Animal measured in hands"),
    ("SNAKE", "Legless reptile"),
    ("MOUSE", "Squeaky rodent"),
    ("SHEEP", "Source of wool"),
    ("LLAMA", "Andean pack animal"),
    ("PANDA", "Bamboo-eating bear"),
    ("SLOTH", "Famously slow tree dweller"),
    ("BISON", "American buffalo"),
    ("TROUT", "Freshwater game fish"),
    ("STORK", "Bird of baby-delivery legend"),
    ("GOOSE", "Honking waterfowl"),
    ("LEMUR", "Madagascar primate"),
    ("HYENA", "Laughing scavenger"),
    ("RABBIT", "Hopping burrower"),
    ("BEAVER", "Dam builder"),
    ("DONKEY", "Braying beast of burden"),
    ("FALCON", "Fast-diving raptor"),
    ("JAGUAR", "Spotted cat of the Americas"),
    ("PARROT", "Talking bird"),
    ("TURTLE", "Shelled reptile"),
    ("WALRUS", "Tusked Arctic mammal"),
    ("WEASEL", "Slinky mustelid"),
    ("GIRAFFE", "Tallest land animal"),
    ("DOLPHIN", "Clicking marine mammal"),
    ("PENGUIN", "Flightless tuxedoed bird"),
    ("LOBSTER", "Clawed crustacean"),
    ("OSTRICH", "Largest living bird"),
    ("BADGER", "Burrowing striped mammal"),
    ("MOOSE", "Largest deer"),
    ("SEAL", "Flippered marine mammal"),
    ("WOLF", "Pack-hunting canine"),
    ("BEAR", "Hibernating mammal"),
    ("CROW", "Clever black bird"),
    ("OWL", "Nocturnal hooter"),
    ("EEL", "Slippery fish"),
];

const TECHNOLOGY: &[Entry] = &[
    ("ROBOT", "Programmable machine"),
    ("LASER", "Focused beam of light"),
    ("PYTHON", "Language named after a comedy troupe"),
    ("CODE", "What programmers write"),
    ("CLOUD", "Remote computing, informally"),
    ("MODEM", "Old dial-up device"),
    ("PIXEL", "Smallest screen dot"),
    ("SERVER", "Machine that answers requests"),
    ("ROUTER", "Network traffic director"),
    ("BINARY", "Base two"),
    ("CURSOR", "Blinking screen marker"),
    ("KERNEL", "Core of an operating system"),
    ("SCREEN", "Display surface"),
    ("MOUSE", "Pointing device"),
    ("EMAIL", "Electronic letter"),
    ("BLOG", "Online journal"),
    ("CACHE", "Fast temporary storage"),
    ("DRONE", "Pilotless aircraft"),
    ("ONLINE", "Connected to the net"),
    ("SOCKET", "Network endpoint"),
    ("TABLET", "Slate-shaped computer"),
    ("BATTERY", "Portable power cell"),
    ("CIRCUIT", "Closed electrical path"),
    ("COMPILER", "Turns source into machine code"),
    ("NETWORK", "Connected computers"),
    ("PROGRAM", "Set of instructions"),
    ("BROWSER", "Web page viewer"),
    ("DATA", "Facts and figures"),
    ("CHIP", "Silicon component"),
    ("WIFI", "Wireless networking"),
    ("APP", "Phone software"),
    ("BYTE", "Eight bits"),
    ("DISK", "Storage platter"),
    ("FIBER", "Optical cable strand"),
    ("INPUT", "Data going in"),
    ("OUTPUT", "Data coming out"),
    ("SENSOR", "Detecting device"),
    ("SILICON", "Valley namesake element"),
    ("TOKEN", "Unit of text for a parser"),
    ("WIDGET", "User interface element"),
];

const FOOD: &[Entry] = &[
    ("APPLE", "Fruit that keeps the doctor away"),
    ("MANGO", "Tropical stone fruit"),
    ("PIZZA", "Pie from Naples"),
    ("HONEY", "Bee-made sweetener"),
    ("BREAD", "Baked loaf"),
    ("PASTA", "Italian noodles"),
    ("SALAD", "Tossed greens"),
    ("TOAST", "Browned bread"),
    ("LEMON", "Sour citrus"),
    ("OLIVE", "Martini garnish"),
    ("ONION", "Tear-inducing bulb"),
    ("RAMEN", "Japanese noodle soup"),
    ("SUSHI", "Vinegared rice dish"),
    ("TACO", "Folded tortilla"),
    ("CURRY", "Spiced sauce dish"),
    ("BAGEL", "Boiled then baked roll"),
    ("BUTTER", "Churned spread"),
    ("CHEESE", "Aged curd"),
    ("CARROT", "Orange root vegetable"),
    ("GARLIC", "Pungent clove"),
    ("NOODLE", "Long strand of dough"),
    ("PEPPER", "Salt's partner"),
    ("TOMATO", "Red fruit treated as a vegetable"),
    ("WAFFLE", "Gridded breakfast cake"),
    ("MUFFIN", "Cup-shaped quick bread"),
    ("CELERY", "Crunchy stalk"),
    ("PANCAKE", "Griddle cake"),
    ("PRETZEL", "Twisted salty snack"),
    ("AVOCADO", "Guacamole base"),
    ("BURRITO", "Wrapped tortilla meal"),
    ("RICE", "Staple grain"),
    ("SOUP", "Bowl of broth"),
    ("STEAK", "Grilled cut of beef"),
    ("BACON", "Cured breakfast strips"),
    ("CREPE", "Thin French pancake"),
    ("DONUT", "Ring-shaped pastry"),
    ("GRAPE", "Vine fruit"),
    ("PEACH", "Fuzzy stone fruit"),
    ("MELON", "Large juicy fruit"),
    ("SALSA", "Chunky tomato dip"),
];

const SPORTS: &[Entry] = &[
    ("SOCCER", "Football outside the US"),
    ("TENNIS", "Love means zero here"),
    ("RUGBY", "Scrum sport"),
    ("GOLF", "Game of birdies and bogeys"),
    ("HOCKEY", "Puck game"),
    ("BOXING", "Sport of the ring"),
    ("KARATE", "Martial art of the empty hand"),
    ("SKIING", "Downhill on snow"),
    ("ROWING", "Oar-powered racing"),
    ("SPRINT", "Short fast race"),
    ("RELAY", "Race with batons"),
    ("DIVING", "Platform and springboard event"),
    ("SURFING", "Riding waves"),
    ("CYCLING", "Tour de France sport"),
    ("ARCHERY", "Bow and arrow sport"),
    ("FENCING", "Sport with foils"),
    ("CRICKET", "Sport of wickets"),
    ("POLO", "Game on horseback"),
    ("BATON", "Relay handoff item"),
    ("COACH", "Team trainer"),
    ("TEAM", "Squad"),
    ("GOAL", "Net result"),
    ("SCORE", "Points tally"),
    ("MATCH", "Contest"),
    ("RACKET", "Tennis gear"),
    ("SKATE", "Glide on ice"),
    ("DARTS", "Pub game with a board"),
    ("CHESS", "Game of kings and pawns"),
    ("MEDAL", "Olympic prize"),
    ("ARENA", "Stadium"),
    ("REFEREE", "Official with a whistle"),
    ("STADIUM", "Large sports venue"),
    ("TROPHY", "Winner's cup"),
    ("LEAGUE", "Association of teams"),
    ("RACE", "Speed contest"),
    ("JUDO", "Olympic martial art"),
    ("SLALOM", "Zigzag ski race"),
    ("INNING", "Baseball division"),
    ("TACKLE", "Bring down the ball carrier"),
    ("SPORT", "Athletic activity"),
];

const MOVIES: &[Entry] = &[
    ("ACTOR", "Film performer"),
    ("SCENE", "Part of a film"),
    ("OSCAR", "Academy Award"),
    ("DRAMA", "Serious genre"),
    ("CAMERA", "Filming device"),
    ("CINEMA", "Movie house"),
    ("SEQUEL", "Part two"),
    ("SCRIPT", "Screenplay"),
    ("STUDIO", "Film production company"),
    ("TRAILER", "Preview"),
    ("COMEDY", "Funny genre"),
    ("HORROR", "Scary genre"),
    ("WESTERN", "Cowboy genre"),
    ("DIRECTOR", "Person calling action"),
    ("EDITOR", "Cutting room worker"),
    ("CAST", "Ensemble of actors"),
    ("PLOT", "Storyline"),
    ("ROLE", "Part to play"),
    ("STAR", "Lead performer"),
    ("REEL", "Film spool"),
    ("EXTRA", "Background actor"),
    ("SCORE", "Film music"),
    ("STUNT", "Daring feat for the camera"),
    ("ALIEN", "Ridley Scott sci-fi classic"),
    ("AVATAR", "Cameron's blue-skinned epic"),
    ("JAWS", "Spielberg shark film"),
    ("ROCKY", "Stallone boxing film"),
    ("TITANIC", "Ship-sinking blockbuster"),
    ("PREMIERE", "Opening night"),
    ("MONTAGE", "Sequence of quick cuts"),
    ("CAMEO", "Brief famous appearance"),
    ("GENRE", "Category of film"),
    ("HERO", "Protagonist"),
    ("VILLAIN", "Bad guy"),
    ("POPCORN", "Theater snack"),
    ("TICKET", "Admission stub"),
    ("SCREEN", "Projection surface"),
    ("ANIME", "Japanese animation"),
    ("NOIR", "Dark crime genre"),
    ("MOVIE", "Motion picture"),
];

const SCIENCE: &[Entry] = &[
    ("ATOM", "Basic unit of matter"),
    ("EARTH", "Third planet from the sun"),
    ("SOLAR", "Of the sun"),
    ("OCEAN", "Vast body of salt water"),
    ("STORM", "Violent weather"),
    ("PLANET", "World orbiting a star"),
    ("NEURON", "Nerve cell"),
    ("QUARK", "Building block of protons"),
    ("PROTON", "Positive particle"),
    ("ENERGY", "Capacity to do work"),
    ("METEOR", "Shooting star"),
    ("COMET", "Icy body with a tail"),
    ("ORBIT", "Path around a star"),
    ("CARBON", "Element six"),
    ("OXYGEN", "Element we breathe"),
    ("NEBULA", "Cloud of interstellar gas"),
    ("THEORY", "Tested explanation"),
    ("GENES", "Units of heredity"),
    ("RADAR", "Detection by radio echo"),
    ("FOSSIL", "Preserved ancient remains"),
    ("GRAVITY", "What keeps us grounded"),
    ("MAGNET", "It attracts iron"),
    ("PLASMA", "Fourth state of matter"),
    ("ENZYME", "Biological catalyst"),
    ("GALAXY", "Milky Way, for one"),
    ("CRYSTAL", "Ordered solid"),
    ("ELEMENT", "Periodic table entry"),
    ("ISOTOPE", "Variant of an element"),
    ("MOLECULE", "Bonded group of atoms"),
    ("CELL", "Unit of life"),
    ("LENS", "Focusing glass"),
    ("ACID", "Low-pH substance"),
    ("BASE", "High-pH substance"),
    ("HELIUM", "Balloon gas"),
    ("LIGHT", "It travels fastest"),
    ("SPACE", "The final frontier"),
    ("BRAIN", "Thinking organ"),
    ("RIVER", "Flowing body of water"),
    ("VOLCANO", "Erupting mountain"),
    ("TIDE", "Moon-driven sea change"),
];

const THEMES: &[(&str, &[Entry])] = &[
    ("animals", ANIMALS),
    ("technology", TECHNOLOGY),
    ("food", FOOD),
    ("sports", SPORTS),
    ("movies", MOVIES),
    ("science", SCIENCE),
];

/// Word and clue lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWordSource;

impl BuiltinWordSource {
    pub fn new() -> Self {
        Self
    }

    pub fn themes() -> impl Iterator<Item = &'static str> {
        THEMES.iter().map(|(name, _)| *name)
    }

    fn entries(theme: &str) -> Result<&'static [Entry], SourceError> {
        THEMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(theme.trim()))
            .map(|(_, entries)| *entries)
            .ok_or_else(|| SourceError::UnknownTheme(theme.to_string()))
    }
}

impl WordSource for BuiltinWordSource {
    fn fetch_theme_words(&self, theme: &str, count: usize, min_length: usize) -> Result<Vec<String>, SourceError> {
        Ok(Self::entries(theme)?
            .iter()
            .filter(|(word, _)| word.len() >= min_length)
            .take(count)
            .map(|(word, _)| word.to_string())
            .collect())
    }
}

impl ClueSource for BuiltinWordSource {
    /// Clues from the theme's list first, then from any other theme
    fn fetch_clues(&self, words: &[String], theme: &str) -> Result<HashMap<String, String>, SourceError> {
        let preferred = Self::entries(theme).unwrap_or(&[]);
        let mut clues = HashMap::new();
        for word in words {
            let key = word.to_uppercase();
            let clue = preferred
                .iter()
                .chain(THEMES.iter().flat_map(|(_, entries)| entries.iter()))
                .find(|(w, _)| *w == key)
                .map(|(_, clue)| clue.to_string());
            if let Some(clue) = clue {
                clues.insert(key, clue);
            }
        }
        Ok(clues)
    }
}
