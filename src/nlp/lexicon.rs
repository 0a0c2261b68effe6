//! Seed lexicons for synthetic passage generation: first names and
//! surnames sampled across writing systems, steering phrases for passage
//! shape, and country names for optional locale steering.

use rand::{seq::SliceRandom, Rng};

pub const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "Matteo", "Richard", "Joseph", "Charles",
    "Lorenzo", "Christopher", "Aurora", "Matthew", "Anthony", "Donald", "Paul", "Mark", "Steven",
    "Andrew", "Kenneth", "George", "Brian", "Edward", "Ronald", "Timothy", "Jason", "Jeffrey",
    "Ryan", "Frank", "Kevin", "Ivan", "Alexander", "Dmitry", "Sergey", "Mikhail", "Vladimir",
    "Andrei", "Nikolai", "Igor", "Pavel", "Sophia", "Marcos", "Maria", "Hannah", "Ana", "Lucas",
    "Leon", "Pedro", "Noah", "Emma", "Xu", "Sun", "Ma", "Zhu", "Lin", "Guo", "Cheng", "He",
    "Luo", "Cao", "María", "José", "Juan", "Carlos", "Francisco", "Antonio", "Manuel",
    "Alejandro", "Diego", "Miguel", "David", "Javier", "Felix", "Rafael", "Fernando", "Luis",
    "Daniel", "Beatrice", "Eduardo", "Alberto", "Roberto", "Pablo", "Sergio", "Jorge", "Oscar",
    "Ricardo", "Ángel", "Santiago", "Emilio", "Domingo", "Andrés", "Muhammad", "Ahmed", "Ali",
    "Omar", "Hassan", "Ibrahim", "Max", "Karim", "Hussein", "Mahmoud",
];

pub const LAST_NAMES: &[&str] = &[
    "Sato", "Suzuki", "Takahashi", "Tanaka", "Watanabe", "Ito", "Yamamoto", "Nakamura",
    "Kobayashi", "Kato", "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Yoo", "Jang", "Ahn",
    "Song", "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "White", "Papadopoulos", "Giannakopoulos", "Georgiou",
    "Dimitriou", "Nikolaidis", "Angelopoulos", "Petrou", "Ioannidis", "Christodoulou",
    "Konstantinou", "Vlachos", "Karagiannis", "Alexandrou", "Kouros", "Manolakis", "Tsiamis",
    "Zacharias", "Tsakiris", "Panagiotopoulos", "Stefanidis", "Ivanov", "Smirnov", "Kuznetsov",
    "Popov", "Sokolov", "Vasiliev", "Petrov", "Sidorov", "Mikhailov", "Nikolaev", "Wang", "Li",
    "Zhang", "Liu", "Chen", "Yang", "Huang", "Zhao", "Wu", "Zhou", "Kenyatta", "Otieno",
    "Mwangi", "Njoroge", "Kiplagat", "Ndlovu", "Zulu", "Dlamini", "Mthembu", "Sithole", "Diop",
    "Faye", "Mohamed", "Farouk", "Amin", "Youssef", "Salah", "Gaber", "Shawky", "Tawfik",
    "El Sayed",
];

/// Steering phrases that vary where and how the planted names appear.
pub const TEXT_TYPES: &[&str] = &[
    "Passive Voice",
    "Casual sentence",
    "In the past",
    "Do you know",
    "A character appears in the middle or end of the sentence, emphasizing the relative clause",
    "Have you met",
    "Inversion for Emphasis",
    "I have heard about",
    "Sentence begins with an adverbial phrase, the character appears in the middle of the sentence",
];

pub const COUNTRIES: &[&str] = &[
    "Madagascar", "Taiwan", "USA", "Germany", "France", "Spain", "Russia", "China", "Japan",
    "Brazil", "India", "Egypt", "South Africa", "Australia", "Canada", "Mexico", "Indonesia",
    "Nigeria", "Turkey", "United Kingdom", "Italy", "Poland", "Argentina", "Netherlands",
    "Belgium", "Switzerland", "Sweden", "Norway", "Finland", "Denmark", "Portugal", "Greece",
    "Iran", "Thailand", "Philippines", "Vietnam", "South Korea", "Saudi Arabia", "Israel",
    "UAE", "New Zealand", "Ireland", "Malaysia", "Singapore", "Hong Kong", "Czech Republic",
    "Hungary", "Romania", "Colombia", "Peru", "Venezuela", "Chile", "Morocco", "Algeria",
    "Tunisia", "Nepal", "Pakistan", "Bangladesh", "Kazakhstan", "Ukraine", "Austria", "Croatia",
    "Serbia", "Kenya", "Ghana", "Zimbabwe", "Cuba", "Panama", "Fiji", "Mongolia", "North Korea",
    "Myanmar", "Ethiopia", "Tanzania", "Libya", "Jordan", "Qatar", "Oman", "Kuwait", "Lebanon",
    "Bulgaria", "Slovakia", "Lithuania", "Latvia", "Estonia", "Cyprus", "Luxembourg", "Macao",
    "Bhutan", "Maldives", "Angola", "Cameroon", "Senegal", "Mali", "Zambia", "Uganda",
    "Namibia", "Botswana", "Mozambique", "Ivory Coast", "Burkina Faso", "Malawi", "Gabon",
    "Lesotho", "Gambia", "Guinea", "Cape Verde", "Rwanda", "Benin", "Burundi", "Somalia",
    "Eritrea", "Djibouti", "Togo", "Seychelles", "Chad", "Central African Republic", "Liberia",
    "Mauritania", "Sri Lanka", "Sierra Leone", "Equatorial Guinea", "Swaziland",
    "Congo (Kinshasa)", "Congo (Brazzaville)",
];

/// Pick one entry from a non-empty lexicon.
pub fn pick<'a, R: Rng>(rng: &mut R, lexicon: &[&'a str]) -> &'a str {
    lexicon.choose(rng).copied().unwrap_or_default()
}
