//! Injected configuration for prompt synthesis.

use crate::provider::Presentation;

/// Word pools and task instructions the synthesizer draws from.
///
/// Passed in explicitly rather than read from module globals so trials run
/// against a known, swappable vocabulary. Every slice must be non-empty.
#[derive(Debug, Clone)]
pub struct HaystackConfig {
    /// Needles planted per trial.
    pub needle_count: usize,
    /// Pet vocabulary for needle entries.
    pub fruits: &'static [&'static str],
    /// Pet vocabulary for filler entries.
    pub animals: &'static [&'static str],
    /// Person names; needle names are drawn without repetition.
    pub names: &'static [&'static str],
    pub countries: &'static [&'static str],
    /// Task instruction sent alongside record-mode haystacks.
    pub record_question: &'static str,
    /// Task instruction sent alongside identifier-mode haystacks.
    pub identifier_question: &'static str,
}

impl HaystackConfig {
    /// Task instruction for the given presentation mode.
    pub fn question(&self, presentation: Presentation) -> &'static str {
        match presentation {
            Presentation::Record => self.record_question,
            Presentation::Identifier => self.identifier_question,
        }
    }
}

impl Default for HaystackConfig {
    fn default() -> Self {
        Self {
            needle_count: 10,
            fruits: FRUITS,
            animals: ANIMALS,
            names: NAMES,
            countries: COUNTRIES,
            record_question: RECORD_QUESTION,
            identifier_question: IDENTIFIER_QUESTION,
        }
    }
}

const RECORD_QUESTION: &str = "Who has a pet fruit instead of a pet animal? \
Respond with a JSON list all the instances you find in the format: \
[{\"name\":\"NAME OF PERSON\",\"fruit\":\"NAME OF FRUIT\"},...]. \
DO NOT INCLUDE ANY ANIMALS.";

const IDENTIFIER_QUESTION: &str = "Which functions return a fruit instead of \
an animal? Respond with a space-separated list of calls to every matching \
function, in the format: functionName1() functionName2(). \
DO NOT INCLUDE FUNCTIONS THAT RETURN ANIMALS.";

const FRUITS: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
    "jackfruit",
    "kiwi",
    "lemon",
    "mango",
    "nectarine",
    "orange",
    "papaya",
    "quince",
    "raspberry",
    "strawberry",
    "tangerine",
];

const ANIMALS: &[&str] = &[
    "alpaca", "antelope", "armadillo", "badger", "bat", "bear", "beaver",
    "bison", "buffalo", "camel", "capybara", "caribou", "cat", "cheetah",
    "chinchilla", "chipmunk", "cougar", "coyote", "crow", "deer", "dingo",
    "dog", "dolphin", "donkey", "duck", "eagle", "elephant", "elk", "falcon",
    "ferret", "finch", "fox", "frog", "gazelle", "gecko", "gerbil", "gibbon",
    "giraffe", "goat", "goose", "gopher", "hamster", "hare", "hawk",
    "hedgehog", "heron", "hippopotamus", "horse", "hyena", "iguana", "jackal",
    "jaguar", "kangaroo", "koala", "lemur", "leopard", "lion", "lizard",
    "llama", "lynx", "marmot", "meerkat", "mole", "mongoose", "moose",
    "mouse", "mule", "newt", "ocelot", "opossum", "otter", "owl", "panda",
    "panther", "parrot", "pelican", "penguin", "pig", "pigeon", "porcupine",
    "possum", "rabbit", "raccoon", "ram", "rat", "raven", "reindeer",
    "rhinoceros", "salamander", "seal", "sheep", "skunk", "sloth", "squirrel",
    "stork", "swan", "tapir", "tiger", "toad", "tortoise", "turtle", "vole",
    "walrus", "weasel", "wolf", "wolverine", "wombat", "yak", "zebra",
];

const NAMES: &[&str] = &[
    "Abigail", "Adam", "Adrian", "Aiden", "Alice", "Amelia", "Andrea",
    "Andrew", "Angela", "Anna", "Anthony", "Arthur", "Ashley", "Aubrey",
    "Audrey", "Austin", "Bella", "Benjamin", "Bernard", "Blake", "Brandon",
    "Brian", "Brooke", "Caleb", "Cameron", "Carla", "Carlos", "Caroline",
    "Carter", "Cecilia", "Charles", "Charlotte", "Chloe", "Christian",
    "Claire", "Clara", "Colin", "Connor", "Daniel", "Daphne", "David",
    "Declan", "Diana", "Dominic", "Dorian", "Dylan", "Eleanor", "Elena",
    "Elias", "Elijah", "Elise", "Ella", "Emilia", "Emily", "Emma", "Eric",
    "Esther", "Ethan", "Eugene", "Evelyn", "Felix", "Fiona", "Frances",
    "Frederick", "Gabriel", "Gavin", "Gemma", "George", "Grace", "Gregory",
    "Hannah", "Harold", "Harper", "Hazel", "Henry", "Hugo", "Ingrid",
    "Irene", "Isaac", "Isabella", "Ivan", "Jack", "Jacob", "Jasmine",
    "Jasper", "Jenna", "Jeremy", "Joanna", "Jonah", "Jordan", "Joseph",
    "Josephine", "Julia", "Julian", "Kara", "Katherine", "Keith", "Kevin",
    "Kieran", "Laila", "Laura", "Laurence", "Leah", "Leonard", "Liam",
    "Lillian", "Lorenzo", "Louisa", "Lucas", "Lucia", "Luther", "Lydia",
    "Madeline", "Malcolm", "Marcus", "Margaret", "Marina", "Martin", "Mason",
    "Matilda", "Maxwell", "Maya", "Melissa", "Micah", "Michael", "Miles",
    "Miriam", "Molly", "Morgan", "Nadia", "Naomi", "Natalie", "Nathan",
    "Nicholas", "Noah", "Nolan", "Nora", "Oliver", "Olivia", "Oscar", "Owen",
    "Patrick", "Paula", "Penelope", "Peter", "Philip", "Phoebe", "Quentin",
    "Rachel", "Raymond", "Rebecca", "Reuben", "Riley", "Robert", "Roland",
    "Rosa", "Rowan", "Ruby", "Russell", "Ruth", "Samuel", "Sarah",
    "Sebastian", "Silas", "Simon", "Sofia", "Stella", "Stephen", "Tamara",
    "Teresa", "Theodore", "Thomas", "Tobias", "Tristan", "Ursula", "Valerie",
    "Vera", "Victor", "Vincent", "Violet", "Vivian", "Walter", "Wesley",
    "William", "Xavier", "Yvonne", "Zachary", "Zoe",
];

const COUNTRIES: &[&str] = &[
    "Albania", "Argentina", "Armenia", "Australia", "Austria", "Belgium",
    "Bolivia", "Botswana", "Brazil", "Bulgaria", "Cambodia", "Cameroon",
    "Canada", "Chile", "Colombia", "Croatia", "Cuba", "Cyprus", "Denmark",
    "Ecuador", "Egypt", "Estonia", "Ethiopia", "Fiji", "Finland", "France",
    "Georgia", "Germany", "Ghana", "Greece", "Guatemala", "Honduras",
    "Hungary", "Iceland", "India", "Indonesia", "Ireland", "Italy",
    "Jamaica", "Japan", "Jordan", "Kenya", "Laos", "Latvia", "Lebanon",
    "Lithuania", "Luxembourg", "Madagascar", "Malaysia", "Malta", "Mexico",
    "Mongolia", "Morocco", "Namibia", "Nepal", "New Zealand", "Nicaragua",
    "Nigeria", "Norway", "Oman", "Panama", "Paraguay", "Peru", "Poland",
    "Portugal", "Qatar", "Romania", "Rwanda", "Senegal", "Serbia",
    "Singapore", "Slovakia", "Slovenia", "Spain", "Sri Lanka", "Sweden",
    "Switzerland", "Tanzania", "Thailand", "Tunisia", "Turkey", "Uganda",
    "Ukraine", "Uruguay", "Venezuela", "Vietnam", "Zambia", "Zimbabwe",
];
