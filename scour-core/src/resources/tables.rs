//! Compiled-in English tables.
//!
//! Order matters for every substitution table: rules run top to bottom and
//! text inserted by one rule is visible to the rules below it.

/// Contraction expansions, looked up per token.
#[rustfmt::skip]
pub static CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "is not"), ("aren't", "are not"), ("can't", "can not"),
    ("can't've", "can not have"), ("could've", "could have"),
    ("couldn't", "could not"), ("couldn't've", "could not have"),
    ("didn't", "did not"), ("doesn't", "does not"), ("don't", "do not"),
    ("hadn't", "had not"), ("hadn't've", "had not have"), ("hasn't", "has not"),
    ("haven't", "have not"), ("he'd", "he would"), ("he'd've", "he would have"),
    ("he'll", "he will"), ("he'll've", "he will have"), ("he's", "he is"),
    ("how'd", "how did"), ("how'd'y", "how do you"), ("how'll", "how will"),
    ("how's", "how is"), ("i'd", "i would"), ("i'd've", "i would have"),
    ("i'll", "i will"), ("i'll've", "i will have"), ("i'm", "i am"),
    ("i've", "i have"), ("I'd", "I would"), ("I'd've", "I would have"),
    ("I'll", "I will"), ("I'll've", "I will have"), ("I'm", "I am"),
    ("I've", "I have"), ("isn't", "is not"), ("it'd", "it would"),
    ("it'd've", "it would have"), ("it'll", "it will"),
    ("it'll've", "it will have"), ("it's", "it is"), ("let's", "let us"),
    ("ma'am", "madam"), ("mayn't", "may not"), ("might've", "might have"),
    ("mightn't", "might not"), ("mightn't've", "might not have"),
    ("must've", "must have"), ("mustn't", "must not"),
    ("mustn't've", "must not have"), ("needn't", "need not"),
    ("needn't've", "need not have"), ("o'clock", "of the clock"),
    ("oughtn't", "ought not"), ("oughtn't've", "ought not have"),
    ("shan't", "shall not"), ("sha'n't", "shall not"),
    ("shan't've", "shall not have"), ("she'd", "she would"),
    ("she'd've", "she would have"), ("she'll", "she will"),
    ("she'll've", "she will have"), ("she's", "she is"),
    ("should've", "should have"), ("shouldn't", "should not"),
    ("shouldn't've", "should not have"), ("so've", "so have"), ("so's", "so as"),
    ("this's", "this is"), ("that'd", "that would"),
    ("that'd've", "that would have"), ("that's", "that is"),
    ("there'd", "there would"), ("there'd've", "there would have"),
    ("there's", "there is"), ("here's", "here is"), ("they'd", "they would"),
    ("they'd've", "they would have"), ("they'll", "they will"),
    ("they'll've", "they will have"), ("they're", "they are"),
    ("they've", "they have"), ("to've", "to have"), ("wasn't", "was not"),
    ("we'd", "we would"), ("we'd've", "we would have"), ("we'll", "we will"),
    ("we'll've", "we will have"), ("we're", "we are"), ("we've", "we have"),
    ("weren't", "were not"), ("what'll", "what will"),
    ("what'll've", "what will have"), ("what're", "what are"),
    ("what's", "what is"), ("what've", "what have"), ("when's", "when is"),
    ("when've", "when have"), ("where'd", "where did"), ("where's", "where is"),
    ("where've", "where have"), ("who'll", "who will"),
    ("who'll've", "who will have"), ("who's", "who is"), ("who've", "who have"),
    ("why's", "why is"), ("why've", "why have"), ("will've", "will have"),
    ("won't", "will not"), ("won't've", "will not have"),
    ("would've", "would have"), ("wouldn't", "would not"),
    ("wouldn't've", "would not have"), ("y'all", "you all"),
    ("y'all'd", "you all would"), ("y'all'd've", "you all would have"),
    ("y'all're", "you all are"), ("y'all've", "you all have"),
    ("you'd", "you would"), ("you'd've", "you would have"),
    ("you'll", "you will"), ("you'll've", "you will have"),
    ("you're", "you are"), ("you've", "you have"),
];

/// Semantic punctuation substitutions, applied before removal.
#[rustfmt::skip]
pub static PUNCTUATION_MAP: &[(&str, &str)] = &[
    ("&", " and "), ("@", " at "), ("%", " percent "), ("+", " plus "),
    ("=", " equals "), ("$", " dollar "), ("€", " euro "), ("£", " pound "),
    ("₹", " rupee "), ("°", " degrees "), ("×", " x "), ("÷", " divided by "),
    ("∞", " infinity "), ("√", " sqrt "), ("π", " pi "), ("α", " alpha "),
    ("β", " beta "), ("θ", " theta "), ("™", " trademark "),
];

/// Characters blanked to a space. Excludes the ASCII apostrophe, which
/// joins contractions.
#[rustfmt::skip]
pub static PUNCTUATION_REMOVE: &[&str] = &[
    "!", "\"", "#", "$", "%", "&", "(", ")", "*", "+", ",", "-", ".", "/",
    ":", ";", "<", "=", ">", "?", "@", "[", "\\", "]", "^", "_", "`", "{",
    "|", "}", "~", "“", "”", "„", "«", "»", "‹", "›", "…", "•", "·", "¡",
    "¿", "–", "—", "―", "‐", "‒", "§", "¶", "†", "‡",
];

/// Apostrophe-like glyphs folded to `'`.
pub static APOSTROPHES: &[&str] = &["’", "‘", "‛", "´", "`", "ʼ", "′", "＇"];

/// Typographic and non-ASCII symbol substitutions.
#[rustfmt::skip]
pub static SPECIAL_CHARS: &[(&str, &str)] = &[
    ("“", "\""), ("”", "\""), ("„", "\""), ("«", "\""), ("»", "\""),
    ("…", "..."), ("–", "-"), ("—", "-"), ("―", "-"), ("‐", "-"),
    ("•", " "), ("·", " "), ("\u{200b}", ""), ("\u{200c}", ""),
    ("\u{feff}", ""), ("\u{00ad}", ""), ("©", " copyright "),
    ("®", " registered "), ("½", " half "), ("¼", " quarter "), ("²", "2"),
    ("³", "3"), ("é", "e"), ("è", "e"), ("ê", "e"), ("ë", "e"), ("à", "a"),
    ("á", "a"), ("â", "a"), ("ä", "a"), ("ç", "c"), ("í", "i"), ("ï", "i"),
    ("ñ", "n"), ("ó", "o"), ("ô", "o"), ("ö", "o"), ("ú", "u"), ("ü", "u"),
    ("ß", "ss"), ("ﬁ", "fi"), ("ﬂ", "fl"),
];

/// Whole-string substring corrections.
#[rustfmt::skip]
pub static SPELL_CORRECTIONS: &[(&str, &str)] = &[
    ("colour", "color"), ("centre", "center"), ("favourite", "favorite"),
    ("travelling", "traveling"), ("counselling", "counseling"),
    ("theatre", "theater"), ("cancelled", "canceled"), ("labour", "labor"),
    ("organisation", "organization"), ("wwii", "world war 2"),
    ("citicise", "criticize"), ("youtu ", "youtube "), ("qoura", "quora"),
    ("sallary", "salary"), ("whta", "what"), ("narcisist", "narcissist"),
    ("howdo", "how do"), ("whatare", "what are"), ("howcan", "how can"),
    ("howmuch", "how much"), ("howmany", "how many"), ("whydo", "why do"),
    ("doI", "do I"), ("theBest", "the best"), ("howdoes", "how does"),
    ("etherium", "ethereum"), ("2k17", "2017"), ("2k18", "2018"),
    ("demonitisation", "demonetization"), ("demonitization", "demonetization"),
    ("demonetisation", "demonetization"), ("watsapp", "whatsapp"),
    ("bcoz", "because"), ("becoz", "because"), ("plz", "please"),
    ("thx", "thanks"),
];

/// Whitespace-like characters folded to an ASCII space.
#[rustfmt::skip]
pub static WHITESPACE: &[&str] = &[
    "\t", "\n", "\r", "\u{000b}", "\u{000c}", "\u{001c}", "\u{001d}",
    "\u{001e}", "\u{001f}", "\u{0085}", "\u{00a0}", "\u{1680}", "\u{180e}",
    "\u{2000}", "\u{2001}", "\u{2002}", "\u{2003}", "\u{2004}", "\u{2005}",
    "\u{2006}", "\u{2007}", "\u{2008}", "\u{2009}", "\u{200a}", "\u{2028}",
    "\u{2029}", "\u{202f}", "\u{205f}", "\u{3000}",
];

/// English stopwords.
#[rustfmt::skip]
pub static STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her", "hers",
    "herself", "it", "it's", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "that'll", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did",
    "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as",
    "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "s", "t", "can", "will", "just",
    "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
    "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];
