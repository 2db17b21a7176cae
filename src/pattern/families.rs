//! Sources of the built-in pattern families.
//!
//! The obfuscation alphabet (Latin look-alikes, digits, `@` for `а`) lives
//! directly in the character classes below.

use crate::pattern::PatternFamily;

/// Characters an author may put between the letters of a word, besides
/// whitespace: the ASCII punctuation from `+` to `|` plus `!#$%&*`.
/// Written for use inside a character class; `-` must stay last.
pub const NOISE_CHARS: &str = r"!@#$%^&*+,./:;<=>?\[\\\]_`{|-";

/// Roots with morphological variants and exclusion lookarounds.
const ROOTS: [&str; 16] = [
    r"(\b[сs]{1}[сsц]{0,1}[uуy](?:[ч4]{0,1}[иаakк][^ц])\w*\b)",
    r"(\b(?!пло|стра|[тл]и)(\w(?!(у|пло)))*[хx][уy](й|йа|[еeё]|и|я|ли|ю)(?!га)\w*\b)",
    r"(\b(п[oо]|[нз][аa])*[хx][eе][рp]\w*\b)",
    r"(\b[мm][уy][дd]([аa][кk]|[oо]|и)\w*\b)",
    r"(\b\w*д[рp](?:[oо][ч4]|[аa][ч4])(?!л)\w*\b)",
    r"(\b(?!(?:кило)?[тм]ет)(?!смо)[а-яa-z]*(?<!с)т[рp][аa][хx]\w*\b)",
    r"(\b[к|k][аaoо][з3z]+[eе]?ё?л\w*\b)",
    r"(\b(?!со)\w*п[еeё]р[нд](и|иc|ы|у|н|е|ы)\w*\b)",
    r"(\b\w*[бп][ссз]д\w+\b)",
    r"(\b([нnп][аa]?[оo]?[xх])\b)",
    r"(\b([аa]?[оo]?[нnпбз][аa]?[оo]?)?([cс][pр][аa][^зжбсвм])\w*\b)",
    r"(\b\w*([оo]т|вы|[рp]и|[оo]|и|[уy]){0,1}([пnрp][iиеeё]{0,1}[3zзсcs][дd])\w*\b)",
    r"(\b(вы)?у?[еeё]?би?ля[дт]?[юоo]?\w*\b)",
    r"(\b(?!вело|ски|эн)\w*[пpp][eеиi][дd][oaоаеeирp](?![цянгюсмйчв])[рp]?(?![лт])\w*\b)",
    r"(\b(?!в?[ст]{1,2}еб)(?:(?:в?[сcз3о][тяaа]?[ьъ]?|вы|п[рp][иоo]|[уy]|р[aа][з3z][ьъ]?|к[оo]н[оo])?[её]б[а-яa-z]*)|(?:[а-яa-z]*[^хлрдв][еeё]б)\b)",
    r"(\b[з3z][аaоo]л[уy]п[аaeеин]\w*\b)",
];

/// Up to six repeats of the previous letter, whitespace or noise.
fn gap(letters: &str) -> String {
    format!(r"[{letters}\s{NOISE_CHARS}]{{0,6}}")
}

/// Like [`gap`], without whitespace.
fn tight_gap(letters: &str) -> String {
    format!("[{letters}{NOISE_CHARS}]{{0,6}}")
}

/// Alternatives of the spaced-letters family: banned stems whose letters may
/// be separated by noise.
pub fn spaced_letters_alternatives() -> Vec<String> {
    vec![
        format!(
            r"\w{{0,5}}[хx]{}[уy]{}[ёiлeеюийя]\w{{0,7}}",
            gap("хx"),
            gap("уy")
        ),
        format!(
            r"\w{{0,6}}[пp]{}[iие]{}[3зс]{}[дd]\w{{0,10}}",
            gap("пp"),
            gap("iие"),
            gap("3зс")
        ),
        format!(r"[сcs][уy]{}[4чkк]\w{{1,3}}", tight_gap("уy")),
        format!(
            r"\w{{0,4}}[bб]{}[lл]{}[yя]\w{{0,10}}",
            gap("bб"),
            gap("lл")
        ),
        r"\w{0,8}[её][bб][лске@eыиаa][наи@йвл]\w{0,8}".to_string(),
        format!(
            r"\w{{0,4}}[еe]{}[бb]{}[uу]{}[н4ч]\w{{0,4}}",
            gap("еe"),
            gap("бb"),
            gap("uу")
        ),
        format!(
            r"\w{{0,4}}[еeё]{}[бb]{}[нn]{}[уy]\w{{0,4}}",
            gap("еeё"),
            gap("бb"),
            gap("нn")
        ),
        format!(
            r"\w{{0,4}}[еe]{}[бb]{}[оoаa@]{}[тnнt]\w{{0,4}}",
            gap("еe"),
            gap("бb"),
            gap("оoаa@")
        ),
        format!(r"\w{{0,10}}[ё]{}[б]\w{{0,6}}", tight_gap("ё")),
        format!(
            r"\w{{0,4}}[pп]{}[иeеi]{}[дd]{}[oоаa@еeиi]{}[рr]\w{{0,12}}",
            gap("pп"),
            gap("иeеi"),
            gap("дd"),
            gap("oоаa@еeиi")
        ),
    ]
}

/// Alternatives of the roots family.
pub fn roots_alternatives() -> &'static [&'static str] {
    &ROOTS
}

/// Full case-insensitive pattern source of a family.
///
/// # Examples
///
/// ```
/// use antimat::pattern::PatternFamily;
/// use antimat::pattern::families::source;
///
/// assert!(source(PatternFamily::Roots).starts_with("(?i)"));
/// ```
pub fn source(family: PatternFamily) -> String {
    let body = match family {
        PatternFamily::SpacedLetters => spaced_letters_alternatives().join("|"),
        PatternFamily::Roots => ROOTS.join("|"),
        PatternFamily::Combined => format!(
            "(?:{})|(?:{})",
            spaced_letters_alternatives().join("|"),
            ROOTS.join("|")
        ),
    };
    format!("(?i){body}")
}
