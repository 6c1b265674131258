//! Supported stopword languages.
//!
//! Language identifiers returned by the classifier are mapped onto a fixed set of
//! stopword-set names (`english`, `french`...). Every row of both tables is labelled
//! with one of these names.
//!
//! Stopword lists are bundled for every supported language.
use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

use lazy_static::lazy_static;

/// Stopword-set identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StopwordLang {
    Arabic,
    Azerbaijani,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Indonesian,
    Italian,
    Kazakh,
    Nepali,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Slovene,
    Spanish,
    Swedish,
    Tajik,
    Turkish,
}

impl StopwordLang {
    /// Name of the stopword set, as stored in the tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopwordLang::Arabic => "arabic",
            StopwordLang::Azerbaijani => "azerbaijani",
            StopwordLang::Danish => "danish",
            StopwordLang::Dutch => "dutch",
            StopwordLang::English => "english",
            StopwordLang::Finnish => "finnish",
            StopwordLang::French => "french",
            StopwordLang::German => "german",
            StopwordLang::Greek => "greek",
            StopwordLang::Hungarian => "hungarian",
            StopwordLang::Indonesian => "indonesian",
            StopwordLang::Italian => "italian",
            StopwordLang::Kazakh => "kazakh",
            StopwordLang::Nepali => "nepali",
            StopwordLang::Norwegian => "norwegian",
            StopwordLang::Portuguese => "portuguese",
            StopwordLang::Romanian => "romanian",
            StopwordLang::Russian => "russian",
            StopwordLang::Slovene => "slovene",
            StopwordLang::Spanish => "spanish",
            StopwordLang::Swedish => "swedish",
            StopwordLang::Tajik => "tajik",
            StopwordLang::Turkish => "turkish",
        }
    }

    /// Map a classifier code (ISO 639-1 or ISO 639-3) to a stopword set.
    ///
    /// Returns `None` for unsupported languages.
    pub fn from_code(code: &str) -> Option<Self> {
        LANG.get(code.to_lowercase().as_str()).copied()
    }

    /// Get the stopword set for this language.
    pub fn stopwords(&self) -> &'static HashSet<&'static str> {
        &STOPWORDS[self]
    }
}

impl Default for StopwordLang {
    /// Detection fallback.
    fn default() -> Self {
        StopwordLang::English
    }
}

impl fmt::Display for StopwordLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopwordLang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANG.values()
            .find(|lang| lang.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unsupported stopword language: {}", s))
    }
}

lazy_static! {
    /// Classifier codes to stopword sets.
    /// Both two-letter and three-letter codes are held so that any classifier can be plugged in.
    pub static ref LANG: HashMap<&'static str, StopwordLang> = {
        use StopwordLang::*;
        let mut m = HashMap::new();
        for (iso1, iso3, lang) in [
            ("en", "eng", English),
            ("hu", "hun", Hungarian),
            ("sv", "swe", Swedish),
            ("kk", "kaz", Kazakh),
            ("no", "nob", Norwegian),
            ("fi", "fin", Finnish),
            ("ar", "ara", Arabic),
            ("id", "ind", Indonesian),
            ("pt", "por", Portuguese),
            ("tr", "tur", Turkish),
            ("az", "aze", Azerbaijani),
            ("sl", "slv", Slovene),
            ("es", "spa", Spanish),
            ("da", "dan", Danish),
            ("ne", "nep", Nepali),
            ("ro", "ron", Romanian),
            ("el", "ell", Greek),
            ("nl", "nld", Dutch),
            ("tg", "tgk", Tajik),
            ("de", "deu", German),
            ("ru", "rus", Russian),
            ("fr", "fra", French),
            ("it", "ita", Italian),
        ] {
            m.insert(iso1, lang);
            m.insert(iso3, lang);
        }
        m
    };

    static ref STOPWORDS: HashMap<StopwordLang, HashSet<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(StopwordLang::English, ENGLISH.iter().copied().collect());
        m.insert(StopwordLang::French, FRENCH.iter().copied().collect());
        m.insert(StopwordLang::German, GERMAN.iter().copied().collect());
        m.insert(StopwordLang::Spanish, SPANISH.iter().copied().collect());
        m.insert(StopwordLang::Italian, ITALIAN.iter().copied().collect());
        m.insert(StopwordLang::Portuguese, PORTUGUESE.iter().copied().collect());
        m.insert(StopwordLang::Dutch, DUTCH.iter().copied().collect());
        m.insert(StopwordLang::Swedish, SWEDISH.iter().copied().collect());
        m.insert(StopwordLang::Danish, DANISH.iter().copied().collect());
        m.insert(StopwordLang::Norwegian, NORWEGIAN.iter().copied().collect());
        m.insert(StopwordLang::Finnish, FINNISH.iter().copied().collect());
        m.insert(StopwordLang::Hungarian, HUNGARIAN.iter().copied().collect());
        m.insert(StopwordLang::Indonesian, INDONESIAN.iter().copied().collect());
        m.insert(StopwordLang::Turkish, TURKISH.iter().copied().collect());
        m.insert(StopwordLang::Azerbaijani, AZERBAIJANI.iter().copied().collect());
        m.insert(StopwordLang::Slovene, SLOVENE.iter().copied().collect());
        m.insert(StopwordLang::Romanian, ROMANIAN.iter().copied().collect());
        m.insert(StopwordLang::Russian, RUSSIAN.iter().copied().collect());
        m.insert(StopwordLang::Kazakh, KAZAKH.iter().copied().collect());
        m.insert(StopwordLang::Tajik, TAJIK.iter().copied().collect());
        m.insert(StopwordLang::Greek, GREEK.iter().copied().collect());
        m.insert(StopwordLang::Arabic, ARABIC.iter().copied().collect());
        m.insert(StopwordLang::Nepali, NEPALI.iter().copied().collect());
        m
    };
}

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
    "won", "won't", "wouldn", "wouldn't",
];

const FRENCH: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "meme", "mes", "moi",
    "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui",
    "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous", "est", "sont", "etait", "ete", "avait", "avoir", "etre", "cette", "cet",
];

const GERMAN: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "da",
    "das", "dass", "dem", "den", "der", "des", "die", "doch", "du", "durch", "ein", "eine",
    "einem", "einen", "einer", "er", "es", "hat", "hatte", "ich", "ihr", "im", "in", "ist",
    "ja", "kann", "man", "mich", "mir", "mit", "nach", "nicht", "noch", "nur", "oder", "sein",
    "sich", "sie", "sind", "so", "um", "und", "uns", "von", "war", "was", "wenn", "wie", "wir",
    "wird", "zu", "zum", "zur",
];

const SPANISH: &[&str] = &[
    "al", "algo", "como", "con", "de", "del", "el", "ella", "ellos", "en", "era", "es", "esta",
    "este", "fue", "ha", "la", "las", "le", "les", "lo", "los", "mas", "me", "mi", "muy", "no",
    "nos", "o", "para", "pero", "por", "que", "se", "si", "sin", "sobre", "su", "sus", "te",
    "tu", "un", "una", "uno", "y", "ya", "yo",
];

const ITALIAN: &[&str] = &[
    "a", "al", "alla", "anche", "che", "chi", "ci", "come", "con", "da", "dei", "del", "della",
    "di", "e", "era", "gli", "ha", "ho", "i", "il", "in", "io", "la", "le", "lei", "lo", "lui",
    "ma", "mi", "ne", "non", "per", "piu", "quello", "se", "si", "sono", "su", "suo", "sua",
    "tu", "un", "una", "uno",
];

const PORTUGUESE: &[&str] = &[
    "a", "ao", "as", "com", "como", "da", "das", "de", "do", "dos", "e", "ela", "ele", "em",
    "era", "foi", "isso", "lhe", "mais", "mas", "me", "meu", "na", "nao", "no", "nos", "o",
    "os", "ou", "para", "pela", "pelo", "por", "que", "se", "sem", "seu", "sua", "um", "uma",
];

const DUTCH: &[&str] = &[
    "aan", "al", "als", "bij", "dan", "dat", "de", "der", "die", "dit", "door", "een", "en",
    "er", "had", "heb", "het", "hij", "hoe", "hun", "ik", "in", "is", "je", "kan", "maar",
    "me", "men", "met", "mij", "na", "naar", "niet", "nog", "nu", "of", "om", "ons", "ook",
    "op", "over", "te", "tot", "uit", "van", "voor", "was", "wat", "we", "wel", "zal", "ze",
    "zij", "zo", "zou",
];

const SWEDISH: &[&str] = &[
    "och", "det", "att", "i", "en", "jag", "hon", "som", "han", "på", "den", "med", "var",
    "sig", "för", "så", "till", "är", "men", "ett", "om", "hade", "de", "av", "icke", "mig",
    "du", "henne", "då", "sin", "nu", "har", "inte", "hans", "honom", "skulle", "hennes",
    "där", "min", "man", "ej", "vid", "kunde", "något", "från", "ut", "när", "efter", "upp",
    "vi", "dem", "vara", "vad", "över", "än", "dig", "kan", "sina", "här", "ha", "mot",
    "alla", "under", "någon", "eller", "allt", "mycket", "sedan", "ju", "denna", "själv",
    "detta", "åt", "utan", "varit", "hur", "ingen", "mitt", "ni", "bli", "blev", "oss",
    "din", "dessa", "några", "deras", "blir", "mina", "samma", "vilken", "er", "sådan",
    "vår", "blivit", "dess", "inom", "mellan", "sådant", "varför", "varje", "vilka",
    "ditt", "vem", "vilket", "sitt", "sådana", "vart", "dina", "vars", "vårt", "våra",
    "ert", "era", "vilkas",
];

const DANISH: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "den", "til", "er", "som", "på", "de", "med", "han",
    "af", "for", "ikke", "der", "var", "mig", "sig", "men", "et", "har", "om", "vi", "min",
    "havde", "ham", "hun", "nu", "over", "da", "fra", "du", "ud", "sin", "dem", "os", "op",
    "man", "hans", "hvor", "eller", "hvad", "skal", "selv", "her", "alle", "vil", "blev",
    "kunne", "ind", "når", "være", "dog", "noget", "ville", "jo", "deres", "efter", "ned",
    "skulle", "denne", "end", "dette", "mit", "også", "under", "have", "dig", "anden",
    "hende", "mine", "alt", "meget", "sit", "sine", "vor", "mod", "disse", "hvis", "din",
    "nogle", "hos", "blive", "mange", "ad", "bliver", "hendes", "været", "thi", "jer",
    "sådan",
];

const NORWEGIAN: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "et", "den", "til", "er", "som", "på", "de", "med",
    "han", "av", "ikke", "ikkje", "der", "så", "var", "meg", "seg", "men", "ett", "har", "om",
    "vi", "min", "mitt", "ha", "hadde", "hun", "nå", "over", "da", "ved", "fra", "du", "ut",
    "sin", "dem", "oss", "opp", "man", "kan", "hans", "hvor", "eller", "hva", "skal", "selv",
    "sjøl", "her", "alle", "vil", "bli", "ble", "blei", "blitt", "kunne", "inn", "når",
    "være", "kom", "noen", "noe", "ville", "dere", "deres", "kun", "ja", "etter", "ned",
    "skulle", "denne", "for", "deg", "si", "sine", "sitt", "mot", "å", "meget", "hvorfor",
    "dette", "disse", "uten", "hvordan", "ingen", "din", "ditt", "blir", "samme", "hvilken",
    "hvilke", "sånn", "inni", "mellom", "vår", "hver", "hvem", "vors", "hvis", "både",
    "bare", "enn", "fordi", "før", "mange", "også", "slik", "vært", "båe", "begge",
    "siden", "dykk", "dykkar", "dei", "deira", "deires", "deim", "di", "då", "eg", "ein",
    "eit", "eitt", "elles", "honom", "hjå", "ho", "hoe", "henne", "hennar", "hennes",
    "hoss", "hossen", "ingi", "inkje", "korleis", "korso", "kva", "kvar", "kvarhelst",
    "kven", "kvi", "kvifor", "me", "medan", "mi", "mine", "mykje", "no", "nokon", "noka",
    "nokor", "noko", "nokre", "sia", "sidan", "so", "somt", "somme", "um", "upp", "vere",
    "vore", "verte", "vort", "varte", "vart",
];

const FINNISH: &[&str] = &[
    "olla", "olen", "olet", "on", "olemme", "olette", "ovat", "ole", "oli", "olisi",
    "olisit", "olisin", "olisimme", "olisitte", "olisivat", "olit", "olin", "olimme",
    "olitte", "olivat", "ollut", "olleet", "en", "et", "ei", "emme", "ette", "eivät", "minä",
    "minun", "minut", "minua", "minussa", "minusta", "minuun", "minulla", "minulta",
    "minulle", "sinä", "sinun", "sinut", "sinua", "sinussa", "sinusta", "sinuun",
    "sinulla", "sinulta", "sinulle", "hän", "hänen", "hänet", "häntä", "hänessä",
    "hänestä", "häneen", "hänellä", "häneltä", "hänelle", "me", "meidän", "meidät",
    "meitä", "meissä", "meistä", "meihin", "meillä", "meiltä", "meille", "te", "teidän",
    "teidät", "teitä", "teissä", "teistä", "teihin", "teillä", "teiltä", "teille", "he",
    "heidän", "heidät", "heitä", "heissä", "heistä", "heihin", "heillä", "heiltä",
    "heille", "tämä", "tämän", "tätä", "tässä", "tästä", "tähän", "tallä", "tältä",
    "tälle", "tänä", "täksi", "tuo", "tuon", "tuota", "tuossa", "tuosta", "tuohon",
    "tuolla", "tuolta", "tuolle", "tuona", "tuoksi", "se", "sen", "sitä", "siinä",
    "siitä", "siihen", "sillä", "siltä", "sille", "sinä", "siksi", "nämä", "näiden",
    "näitä", "näissä", "näistä", "näihin", "näillä", "näiltä", "näille", "näinä",
    "näiksi", "nuo", "noiden", "noita", "noissa", "noista", "noihin", "noilla",
    "noilta", "noille", "noina", "noiksi", "ne", "niiden", "niitä", "niissä", "niistä",
    "niihin", "niillä", "niiltä", "niille", "niinä", "niiksi", "kuka", "kenen", "kenet",
    "ketä", "kenessä", "kenestä", "keneen", "kenellä", "keneltä", "kenelle", "kenenä",
    "keneksi", "ketkä", "keiden", "ketkä", "keitä", "mikä", "minkä", "mitä", "missä",
    "mistä", "mihin", "millä", "miltä", "mille", "minä", "miksi", "mitkä", "joka",
    "jonka", "jota", "jossa", "josta", "johon", "jolla", "jolta", "jolle", "jona",
    "joksi", "jotka", "joiden", "joita", "joissa", "joista", "joihin", "joilla",
    "joilta", "joille", "joina", "joiksi", "että", "ja", "jos", "koska", "kuin", "mutta",
    "niin", "sekä", "sillä", "tai", "vaan", "vai", "vaikka", "kanssa", "mukaan", "noin",
    "poikki", "yli", "kun", "niin", "nyt", "itse",
];

const HUNGARIAN: &[&str] = &[
    "a", "ahogy", "ahol", "aki", "akik", "akkor", "alatt", "által", "általában", "amely",
    "amelyek", "amelyekben", "amelyeket", "amelyet", "amelynek", "ami", "amit", "amolyan",
    "amíg", "amikor", "át", "abban", "ahhoz", "annak", "arra", "arról", "az", "azok",
    "azon", "azt", "azzal", "azért", "aztán", "azután", "azonban", "bár", "be", "belül",
    "benne", "cikk", "cikkek", "cikkeket", "csak", "de", "e", "eddig", "egész", "egy",
    "egyes", "egyetlen", "egyéb", "egyik", "egyre", "ekkor", "el", "elég", "ellen", "elő",
    "először", "előtt", "első", "én", "éppen", "ebben", "ehhez", "emilyen", "ennek",
    "erre", "ez", "ezt", "ezek", "ezen", "ezzel", "ezért", "és", "fel", "felé", "hanem",
    "hiszen", "hogy", "hogyan", "igen", "így", "illetve", "ill", "ilyen", "ilyenkor",
    "ison", "ismét", "itt", "jó", "jól", "jobban", "kell", "kellett", "keresztül",
    "keressünk", "ki", "kívül", "között", "közül", "legalább", "lehet", "lehetett",
    "legyen", "lenne", "lenni", "lesz", "lett", "maga", "magát", "majd", "már", "más",
    "másik", "meg", "még", "mellett", "mert", "mely", "melyek", "mi", "mit", "míg", "miért",
    "milyen", "mikor", "minden", "mindent", "mindenki", "mindig", "mint", "mintha", "mivel",
    "most", "nagy", "nagyobb", "nagyon", "ne", "néha", "nekem", "neki", "nem", "néhány",
    "nélkül", "nincs", "olyan", "ott", "össze", "ő", "ők", "őket", "pedig", "persze", "rá",
    "s", "saját", "sem", "semmi", "sok", "sokat", "sokkal", "számára", "szemben", "szerint",
    "szinte", "talán", "tehát", "teljes", "tovább", "továbbá", "több", "úgy", "ugyanis",
    "új", "újabb", "újra", "után", "utána", "utolsó", "vagy", "vagyis", "valaki", "valami",
    "valamint", "való", "vagyok", "van", "vannak", "volt", "voltam", "voltak", "voltunk",
    "vissza", "vele", "viszont", "volna",
];

const INDONESIAN: &[&str] = &[
    "ada", "adalah", "adanya", "agar", "akan", "akhirnya", "aku", "amat", "anda", "antara",
    "apa", "apabila", "apakah", "atau", "bagaimana", "bagi", "bahwa", "baik", "banyak",
    "barang", "beberapa", "begitu", "belum", "benar", "berada", "berapa", "bersama",
    "biasa", "bila", "bisa", "boleh", "bukan", "cukup", "dalam", "dan", "dapat", "dari",
    "daripada", "dengan", "di", "dia", "dan", "demikian", "diri", "dirinya", "harus",
    "hal", "hanya", "hingga", "ia", "ialah", "ini", "itu", "jadi", "jika", "juga", "kalau",
    "kami", "kamu", "karena", "ke", "kemudian", "kepada", "ketika", "kita", "lagi",
    "lain", "lalu", "lebih", "maka", "mana", "masih", "mau", "melainkan", "mereka",
    "meski", "mungkin", "namun", "nya", "oleh", "pada", "para", "pernah", "pula", "saat",
    "saja", "sama", "sambil", "sampai", "sangat", "saya", "se", "sebagai", "sebelum",
    "sebuah", "sedang", "sehingga", "sejak", "sekali", "semua", "sendiri", "seperti",
    "serta", "sesudah", "setelah", "setiap", "suatu", "sudah", "supaya", "tak", "tanpa",
    "tapi", "telah", "tentang", "tersebut", "tetapi", "tidak", "untuk", "waktu", "ya",
    "yaitu", "yakni", "yang",
];

const TURKISH: &[&str] = &[
    "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birşey", "biz",
    "bu", "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en", "gibi", "hem",
    "hep", "hepsi", "her", "hiç", "için", "ile", "ise", "kez", "ki", "kim", "mı", "mu",
    "mü", "nasıl", "ne", "neden", "nerde", "nerede", "nereye", "niçin", "niye", "o", "sanki",
    "şey", "siz", "şu", "tüm", "ve", "veya", "ya", "yani", "ben", "sen", "onlar", "bir",
    "olarak", "olan", "oldu", "olduğu", "daha", "kadar", "sonra", "önce",
];

const AZERBAIJANI: &[&str] = &[
    "a", "ad", "altı", "altmış", "amma", "arasında", "artıq", "ay", "az", "bax", "belə",
    "bəli", "bəlkə", "beş", "bəy", "bəzən", "bəzi", "bilər", "bir", "biraz", "biri",
    "birşey", "biz", "bizim", "bizlər", "bu", "buna", "bundan", "bunların", "bunu",
    "bunun", "buradan", "bütün", "ci", "cı", "çox", "cu", "cü", "çünki", "da", "daha",
    "də", "dedi", "dək", "dən", "dəqiqə", "deyil", "dir", "doqquz", "doqsan", "dörd",
    "düz", "ə", "edən", "edir", "əgər", "əlbəttə", "elə", "əlli", "ən", "əslində", "et",
    "etdi", "etmə", "etmək", "faiz", "gilə", "görə", "ha", "haqqında", "harada", "hə",
    "heç", "həm", "həmin", "həmişə", "hər", "ı", "idi", "iki", "il", "ildə", "ilə", "ilk",
    "in", "indi", "isə", "istifadə", "iyirmi", "ki", "kim", "kimə", "kimi", "lakin",
    "lap", "məhz", "mən", "mənə", "mirşey", "nə", "nəhayət", "niyə", "o", "obirisi",
    "olan", "olar", "olaraq", "oldu", "olduğu", "olmadı", "olmaz", "olmuşdur", "olsun",
    "olur", "on", "ona", "ondan", "onlar", "onlardan", "onların", "onsuzda", "onu",
    "onun", "oradan", "otuz", "öz", "özü", "qarşı", "qədər", "qırx", "saat", "sadəcə",
    "saniyə", "səhv", "səkkiz", "səksən", "sən", "sənə", "sənin", "siz", "sizin",
    "sizlər", "sonra", "təəssüf", "ü", "üç", "üçün", "var", "və", "xan", "xanım",
    "xeyr", "ya", "yalnız", "yaxşı", "yeddi", "yenə", "yəni", "yetmiş", "yox", "yoxdur",
    "yoxsa", "yüz", "zaman",
];

const SLOVENE: &[&str] = &[
    "a", "ali", "bi", "bil", "bila", "bile", "bili", "bilo", "biti", "bo", "bodo", "bom",
    "bomo", "boste", "bova", "bi", "ce", "da", "do", "ga", "gre", "i", "ima", "imajo",
    "imam", "imamo", "imate", "in", "iz", "ja", "jaz", "je", "jih", "jim", "jo", "k",
    "kaj", "kako", "kar", "kateri", "katera", "katero", "ker", "ki", "kje", "ko", "koder",
    "kot", "ko", "le", "lahko", "med", "mi", "mu", "na", "nad", "naj", "ne", "nas", "ni",
    "nič", "nje", "njega", "njegov", "njen", "njih", "njim", "njo", "no", "o", "ob", "od",
    "on", "ona", "oni", "ono", "pa", "po", "pod", "pri", "pred", "s", "sam", "se", "si",
    "so", "sem", "smo", "ste", "sta", "še", "ta", "tako", "tam", "te", "tega", "tem",
    "ti", "tisti", "to", "tudi", "v", "vas", "ve", "vi", "vse", "vsi", "z", "za", "že",
];

const ROMANIAN: &[&str] = &[
    "a", "acea", "aceasta", "această", "aceea", "acei", "aceia", "acel", "acela", "acele",
    "acelea", "acest", "acesta", "aceste", "acestea", "acestei", "acestia", "acestui",
    "acolo", "acum", "ai", "aia", "al", "ale", "alt", "alta", "alte", "altul", "am", "ar",
    "are", "aș", "au", "avea", "aveau", "avem", "aveți", "avut", "azi", "ca", "care",
    "ce", "cea", "cei", "cel", "cele", "cine", "cu", "cum", "da", "dacă", "dar", "de",
    "deci", "decât", "deja", "din", "dintre", "doar", "după", "ea", "ei", "el", "ele",
    "era", "este", "eu", "fi", "fie", "fiind", "fost", "îi", "îl", "îmi", "în", "încă",
    "înainte", "între", "își", "la", "le", "li", "lor", "lui", "mai", "mea", "mei", "meu",
    "mi", "mult", "multe", "nici", "noi", "nu", "o", "ori", "pe", "pentru", "peste", "poate",
    "prin", "sa", "să", "se", "sau", "sînt", "sunt", "și", "spre", "sub", "ta", "tale",
    "te", "tot", "toate", "toți", "tu", "un", "una", "unde", "unei", "unor", "unui",
    "va", "vă", "voi", "vor",
];

const RUSSIAN: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
    "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
    "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "были", "куда", "зачем",
    "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой", "хоть", "после",
    "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них", "какая", "много",
    "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед", "иногда",
    "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю",
    "между",
];

const KAZAKH: &[&str] = &[
    "ах", "ох", "эх", "ай", "эй", "ой", "тағы", "тағыда", "әрине", "жоқ", "сондай", "осындай",
    "осылай", "солай", "мұндай", "бұндай", "мен", "сен", "ол", "біз", "біздер", "олар",
    "сіз", "сіздер", "маған", "оған", "саған", "оның", "сенің", "менің", "сізің", "бірақ",
    "алайда", "дегенмен", "және", "немесе", "егер", "себебі", "үшін", "бұл", "сол", "осы",
    "әр", "барлық", "бәрі", "кім", "не", "қайда", "қашан", "неге", "қалай", "да", "де",
    "та", "те", "бар", "еді", "екен", "болып", "болды", "болған",
];

const TAJIK: &[&str] = &[
    "ва", "дар", "ба", "аз", "ки", "бо", "то", "ин", "он", "ҳам", "як", "барои", "мо",
    "шумо", "ман", "ту", "вай", "онҳо", "мешавад", "буд", "аст", "шуд", "кард", "гуфт",
    "агар", "вале", "аммо", "чун", "низ", "ё", "ҳар", "ҳеҷ", "чӣ", "кӣ", "куҷо", "чаро",
    "пас", "пеш", "баъд", "бе", "бар", "зеро", "лекин", "худ", "боз", "ҳамин", "ҳамон",
];

const GREEK: &[&str] = &[
    "αλλα", "αν", "αντι", "απο", "αυτα", "αυτεσ", "αυτη", "αυτο", "αυτοι", "αυτοσ", "αυτουσ",
    "αυτων", "για", "δε", "δεν", "εαν", "ειμαι", "ειναι", "εισαι", "ειστε", "εκεινα",
    "εκεινεσ", "εκεινη", "εκεινο", "εκεινοι", "εκεινοσ", "εκεινουσ", "εκεινων", "ενω",
    "επι", "η", "θα", "ισωσ", "κ", "και", "κατα", "κι", "μα", "με", "μετα", "μη", "μην",
    "να", "ο", "οι", "ομωσ", "οπωσ", "οσο", "οτι", "παρα", "ποια", "ποιεσ", "ποιο", "ποιοι",
    "ποιοσ", "ποιουσ", "ποιων", "που", "προσ", "πωσ", "σε", "στη", "στην", "στο", "στον",
    "τα", "την", "τησ", "το", "τον", "τοτε", "του", "των", "ωσ",
];

const ARABIC: &[&str] = &[
    "إذ", "إذا", "إذما", "إذن", "أف", "أقل", "أكثر", "ألا", "إلا", "التي", "الذي", "الذين",
    "اللاتي", "اللائي", "اللتان", "اللتيا", "اللتين", "اللذان", "اللذين", "اللواتي", "إلى",
    "إليك", "إليكم", "إليكما", "إليكن", "أم", "أما", "أن", "إن", "إنا", "أنا", "أنت", "أنتم",
    "أنتما", "أنتن", "إنما", "إنه", "أنى", "آه", "أو", "أولئك", "أين", "إي", "أي", "بعد",
    "بعض", "بك", "بكم", "بل", "بلى", "بما", "بماذا", "بمن", "بنا", "به", "بها", "بي", "بين",
    "تلك", "ثم", "حتى", "حيث", "ذا", "ذلك", "ذه", "ذو", "ذي", "عل", "على", "عليك", "عليه",
    "عما", "عن", "عند", "غير", "فإن", "فلا", "فمن", "في", "فيم", "فيما", "فيه", "فيها",
    "قد", "كأن", "كذا", "كل", "كلا", "كم", "كما", "كي", "كيف", "لا", "لدى", "لست", "لعل",
    "لك", "لكم", "لكن", "لم", "لما", "لن", "له", "لها", "لو", "لي", "ليت", "ليس", "ما",
    "ماذا", "متى", "مع", "مما", "ممن", "من", "منه", "منها", "مه", "هذا", "هذه", "هل", "هم",
    "هما", "هن", "هنا", "هو", "هي", "و", "ولا", "ولكن", "ولو", "وما", "ومن", "وهو", "يا",
];

const NEPALI: &[&str] = &[
    "छ", "र", "पनि", "छन्", "लागि", "भएको", "गरेको", "भने", "गर्न", "गर्ने", "हो", "तथा", "यो",
    "रहेको", "उनले", "थियो", "हुने", "गरेका", "थिए", "गर्दै", "तर", "नै", "को", "मा", "हुन्",
    "भन्ने", "हुन", "गरी", "त", "हुन्छ", "अब", "के", "रहेका", "गरेर", "छैन", "दिए", "भए",
    "यस", "ले", "गर्नु", "औं", "सो", "त्यो", "कि", "जुन", "यी", "का", "गरि", "ती", "न", "छु",
    "छौं", "लाई", "नि", "उप", "अक्सर", "आदि", "कसरी", "क्रमशः", "चाले", "अगाडि", "अझै",
    "अनुसार", "अन्तर्गत", "अन्य", "अन्यत्र", "अरु", "अलग", "आए", "आफू", "आफ्नो", "उनको",
    "उनी", "उहाँ", "एक", "ऊ", "कुनै", "कुन", "कहाँ", "किन", "कृपया", "गए", "जब", "जस्तै",
    "जहाँ", "जो", "तपाईं", "तिनी", "तिमी", "तिनीहरू", "त्यहाँ", "दुई", "धेरै", "नत्र",
    "पछि", "पहिले", "फेरि", "बारे", "भन्दा", "म", "मलाई", "मेरो", "यदि", "यहाँ", "वा",
    "सबै", "साथै", "सँग", "हामी", "हाम्रो",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_code_kinds_map() {
        assert_eq!(StopwordLang::from_code("en"), Some(StopwordLang::English));
        assert_eq!(StopwordLang::from_code("eng"), Some(StopwordLang::English));
        assert_eq!(StopwordLang::from_code("DEU"), Some(StopwordLang::German));
        assert_eq!(StopwordLang::from_code("sl"), Some(StopwordLang::Slovene));
    }

    #[test]
    fn unsupported_code() {
        assert_eq!(StopwordLang::from_code("jpn"), None);
        assert_eq!(StopwordLang::from_code(""), None);
    }

    #[test]
    fn name_roundtrip() {
        for lang in LANG.values() {
            assert_eq!(lang.as_str().parse::<StopwordLang>().unwrap(), *lang);
        }
        assert!("klingon".parse::<StopwordLang>().is_err());
    }

    #[test]
    fn english_stopwords() {
        let sw = StopwordLang::English.stopwords();
        assert!(sw.contains("the"));
        assert!(sw.contains("wouldn't"));
        assert!(!sw.contains("whale"));
    }

    #[test]
    fn every_language_has_stopwords() {
        for lang in LANG.values() {
            assert!(!lang.stopwords().is_empty(), "{} has no stopwords", lang);
        }
    }

    #[test]
    fn latin_script_stopwords() {
        let sw = StopwordLang::Swedish.stopwords();
        assert!(sw.contains("och") && sw.contains("jag"));
        let sw = StopwordLang::Hungarian.stopwords();
        assert!(sw.contains("az") && sw.contains("hogy"));
    }
}
