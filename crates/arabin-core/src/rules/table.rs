//! Static rule data.
//!
//! Every pair maps a Latin pattern to its fully vocalized Arabic rendering.
//! Irregular spellings (`cchoo`, `qqo`, `rron`, `thon`, ...) are kept as users
//! type them today; do not normalize them without checking real input.

/// Whole-word idioms, matched before any letter decomposition.
pub(super) const IDIOMS: &[(&str, &str)] = &[
    ("'alaa", "عَلٰى"),
    ("dzaalika", "ذٰلِكَ"),
    ("saw", "ﷺ"),
];

/// Definite article, alif, and punctuation rewrites.
pub(super) const PUNCTUATION: &[(&str, &str)] = &[
    ("--", "ال"),
    ("-", "ا"),
    (",", "،"),
    (";", ""),
];

/// Tā' marbūṭa with tanwīn or a short vowel.
pub(super) const TA_MARBUTA: &[(&str, &str)] = &[
    ("TaN", "ةً"),
    ("TiN", "ةٍ"),
    ("TuN", "ةٌ"),
    ("Ta", "ةَ"),
    ("Ti", "ةِ"),
    ("Tu", "ةُ"),
];

/// Doubled consonants (shadda), with long vowel, tanwīn, or short vowel.
pub(super) const GEMINATES: &[(&str, &str)] = &[
    ("cchuu", "خُّوْ"),
    ("cchii", "خِّيْ"),
    ("cchoo", "خَّا"),
    ("cchuN", "خٌّ"),
    ("cchiN", "خٍّ"),
    ("cchaN", "خًّ"),

    ("ddhuu", "ظُّوْ"),
    ("ddhii", "ظِّيْ"),
    ("ddhoo", "ظَّا"),
    ("ddhuN", "ظٌّ"),
    ("ddhiN", "ظٍّ"),
    ("ddhaN", "ظًّ"),

    ("ddluu", "ضُّوْ"),
    ("ddlii", "ضِّيْ"),
    ("ddloo", "ضَّا"),
    ("ddluN", "ضٌّ"),
    ("ddliN", "ضٍّ"),
    ("ddlaN", "ضًّ"),

    ("ddzuu", "ذُّوْ"),
    ("ddzii", "ذِّيْ"),
    ("ddzaa", "ذَّا"),
    ("ddzuN", "ذٌّ"),
    ("ddziN", "ذٍّ"),
    ("ddzaN", "ذًّ"),

    ("gghuu", "غُّوْ"),
    ("gghii", "غِّيْ"),
    ("gghoo", "غَّا"),
    ("gghuN", "غٌّ"),
    ("gghiN", "غٍّ"),
    ("gghoN", "غًّ"),

    ("kkhuu", "حُّوْ"),
    ("kkhii", "حِّيْ"),
    ("kkhaa", "حَّا"),
    ("kkhuN", "حٌّ"),
    ("kkhiN", "حٍّ"),
    ("kkhaN", "حًّ"),

    ("sshuu", "صُّوْ"),
    ("sshii", "صِّيْ"),
    ("sshoo", "صَّا"),
    ("sshuN", "صٌّ"),
    ("sshiN", "صٍّ"),
    ("sshaN", "صًّ"),

    ("ssyuu", "شُّوْ"),
    ("ssyii", "شِّيْ"),
    ("ssyaa", "شَّا"),
    ("ssyuN", "شٌّ"),
    ("ssyiN", "شٍّ"),
    ("ssyaN", "شًّ"),

    ("tthuu", "طُّوْ"),
    ("tthii", "طِّيْ"),
    ("tthoo", "طَّا"),
    ("tthuN", "طٌّ"),
    ("tthiN", "طٍّ"),
    ("tthoN", "طًّ"),

    ("ttsuu", "ثُّوْ"),
    ("ttsii", "ثِّيْ"),
    ("ttsaa", "ثَّا"),
    ("ttsuN", "ثٌّ"),
    ("ttsiN", "ثٍّ"),
    ("ttsaN", "ثًّ"),

    ("bbuu", "بُّوْ"),
    ("bbii", "بِّيْ"),
    ("bbaa", "بَّا"),
    ("bbuN", "بٌّ"),
    ("bbiN", "بٍّ"),
    ("bbaN", "بًّ"),

    ("dduu", "دُّوْ"),
    ("ddii", "دِّيْ"),
    ("ddaa", "دَّا"),
    ("dduN", "دٌّ"),
    ("ddiN", "دٍّ"),
    ("ddaN", "دًّ"),

    ("ffuu", "فُّوْ"),
    ("ffii", "فِّيْ"),
    ("ffaa", "فَّا"),
    ("ffuN", "فٌّ"),
    ("ffiN", "فٍّ"),
    ("ffaN", "فًّ"),

    ("hhuu", "هُّوْ"),
    ("hhii", "هِّيْ"),
    ("hhaa", "هَّا"),
    ("hhuN", "هٌّ"),
    ("hhiN", "هٍّ"),
    ("hhaN", "هًّ"),

    ("jjuu", "جُّوْ"),
    ("jjii", "جِّيْ"),
    ("jjaa", "جَّا"),
    ("jjuN", "جٌّ"),
    ("jjiN", "جٍّ"),
    ("jjaN", "جًّ"),

    ("kkuu", "كُّوْ"),
    ("kkii", "كِّيْ"),
    ("kkaa", "كَّا"),
    ("kkuN", "كٌّ"),
    ("kkiN", "كٍّ"),
    ("kkaN", "كًّ"),

    ("lluu", "لُّوْ"),
    ("llii", "لِّيْ"),
    ("llaa", "لَّا"),
    ("lluN", "لٌّ"),
    ("lliN", "لٍّ"),
    ("llaN", "لًّ"),

    ("mmuu", "مُّوْ"),
    ("mmii", "مِّيْ"),
    ("mmaa", "مَّا"),
    ("mmuN", "مٌّ"),
    ("mmiN", "مٍّ"),
    ("mmaN", "مًّ"),

    ("nnuu", "نُّوْ"),
    ("nnii", "نِّيْ"),
    ("nnaa", "نَّا"),
    ("nnuN", "نٌّ"),
    ("nniN", "نٍّ"),
    ("nnaN", "نًّ"),

    ("qquu", "قُّوْ"),
    ("qqii", "قِّيْ"),
    ("qqo", "قَّا"),
    ("qquN", "قٌّ"),
    ("qqiN", "قٍّ"),
    ("qqoN", "قًّ"),

    ("rruu", "رُّوْ"),
    ("rrii", "رِّيْ"),
    ("rroo", "رَّا"),
    ("rruN", "رٌّ"),
    ("rriN", "رٍّ"),
    ("rron", "رًّ"),

    ("ssuu", "سُّوْ"),
    ("ssii", "سِّيْ"),
    ("ssaa", "سَّا"),
    ("ssuN", "سٌّ"),
    ("ssiN", "سٍّ"),
    ("ssaN", "سًّ"),

    ("ttuu", "تُّوْ"),
    ("ttii", "تِّيْ"),
    ("ttaa", "تَّا"),
    ("ttuN", "تٌّ"),
    ("ttiN", "تٍّ"),
    ("ttaN", "تًّ"),

    ("wwuu", "وُّوْ"),
    ("wwii", "وِّيْ"),
    ("wwaa", "وَّا"),
    ("wwuN", "وٌّ"),
    ("wwiN", "وٍّ"),
    ("wwaN", "وًّ"),

    ("yyuu", "يُّوْ"),
    ("yyii", "يِّيْ"),
    ("yyaa", "يَّا"),
    ("yyuN", "يٌّ"),
    ("yyiN", "يٍّ"),
    ("yyaN", "يًّ"),

    ("zzuu", "زُّوْ"),
    ("zzii", "زِّيْ"),
    ("zzaa", "زَّا"),
    ("zzuN", "زٌّ"),
    ("zziN", "زٍّ"),
    ("zzaN", "زًّ"),

    ("''uu", "عُّوْ"),
    ("''ii", "عِّيْ"),
    ("''aa", "عَّا"),
    ("''uN", "عٌّ"),
    ("''iN", "عٍّ"),
    ("''aN", "عًّ"),

    ("cchu", "خُّ"),
    ("cchi", "خِّ"),
    ("ccha", "خَّ"),

    ("ddhu", "ظُّ"),
    ("ddhi", "ظِّ"),
    ("ddha", "ظَّ"),

    ("ddlu", "ضُّ"),
    ("ddli", "ضِّ"),
    ("ddla", "ضَّ"),

    ("ddzu", "ذُّ"),
    ("ddzi", "ذِّ"),
    ("ddza", "ذَّ"),

    ("gghu", "غُّ"),
    ("gghi", "غِّ"),
    ("ggha", "غَّ"),

    ("kkhu", "حُّ"),
    ("kkhi", "حِّ"),
    ("kkha", "حَّ"),

    ("sshu", "صُّ"),
    ("sshi", "صِّ"),
    ("ssha", "صَّ"),

    ("ssyu", "شُّ"),
    ("ssyi", "شِّ"),
    ("ssya", "شَّ"),

    ("tthu", "طُّ"),
    ("tthi", "طِّ"),
    ("ttho", "طَّ"),

    ("ttsu", "ثُّ"),
    ("ttsi", "ثِّ"),
    ("ttsa", "ثَّ"),

    ("lloo", "للّٰ"),
    ("llo", "للّٰ"),

    ("tta", "تَّ"),
    ("ttu", "تُّ"),
    ("tti", "تِّ"),

    ("bbu", "بُّ"),
    ("bbi", "بِّ"),
    ("bba", "بَّ"),

    ("ddu", "دُّ"),
    ("ddi", "دِّ"),
    ("dda", "دَّ"),

    ("ffu", "فُّ"),
    ("ffi", "فِّ"),
    ("ffa", "فَّ"),

    ("hhu", "هُّ"),
    ("hhi", "هِّ"),
    ("hha", "هَّ"),

    ("jju", "جُّ"),
    ("jji", "جِّ"),
    ("jja", "جَّ"),

    ("kku", "كُّ"),
    ("kki", "كِّ"),
    ("kka", "كَّ"),

    ("llu", "لُّ"),
    ("lli", "لِّ"),
    ("lla", "لَّ"),

    ("mmu", "مُّ"),
    ("mmi", "مِّ"),
    ("mma", "مَّ"),

    ("nnu", "نُّ"),
    ("nni", "نِّ"),
    ("nna", "نَّ"),

    ("qqu", "قُّ"),
    ("qqi", "قِّ"),

    ("rru", "رُّ"),
    ("rri", "رِّ"),
    ("rra", "رَّ"),

    ("ssu", "سُّ"),
    ("ssi", "سِّ"),
    ("ssa", "سَّ"),

    ("wwu", "وُّ"),
    ("wwi", "وِّ"),
    ("wwa", "وَّ"),

    ("yyu", "يُّ"),
    ("yyi", "يِّ"),
    ("yya", "يَّ"),

    ("zzu", "زُّ"),
    ("zzi", "زِّ"),
    ("zza", "زَّ"),

    ("''u", "عُّ"),
    ("''i", "عِّ"),
    ("''a", "عَّ"),
];

/// Consonant digraphs with long vowel, tanwīn, or short vowel.
pub(super) const DIGRAPHS: &[(&str, &str)] = &[
    ("chuu", "خُوْ"),
    ("chii", "خِيْ"),
    ("choo", "خَا"),
    ("chuN", "خٌ"),
    ("chiN", "خٍ"),
    ("chaN", "خً"),

    ("dhuu", "ظُوْ"),
    ("dhii", "ظِيْ"),
    ("dhoo", "ظَا"),
    ("dhuN", "ظٌ"),
    ("dhiN", "ظٍ"),
    ("dhaN", "ظً"),

    ("dluu", "ضُوْ"),
    ("dlii", "ضِيْ"),
    ("dloo", "ضَا"),
    ("dluN", "ضٌ"),
    ("dliN", "ضٍ"),
    ("dlaN", "ضً"),

    ("dzuu", "ذُوْ"),
    ("dzii", "ذِيْ"),
    ("dzaa", "ذَا"),
    ("dzuN", "ذٌ"),
    ("dziN", "ذٍ"),
    ("dzaN", "ذً"),

    ("ghuu", "غُوْ"),
    ("ghii", "غِيْ"),
    ("ghoo", "غَا"),
    ("ghuN", "غٌ"),
    ("ghiN", "غٍ"),
    ("ghaN", "غً"),

    ("khuu", "حُوْ"),
    ("khii", "حِيْ"),
    ("khaa", "حَا"),
    ("khuN", "حٌ"),
    ("khiN", "حٍ"),
    ("khaN", "حً"),

    ("shuu", "صُوْ"),
    ("shii", "صِيْ"),
    ("shoo", "صَا"),
    ("shuN", "صٌ"),
    ("shiN", "صٍ"),
    ("shaN", "صً"),

    ("syuu", "شُوْ"),
    ("syii", "شِيْ"),
    ("syaa", "شَا"),
    ("syuN", "شٌ"),
    ("syiN", "شٍ"),
    ("syaN", "شً"),

    ("thuu", "طُوْ"),
    ("thii", "طِيْ"),
    ("thoo", "طَا"),
    ("thuN", "طٌ"),
    ("thiN", "طٍ"),
    ("thon", "طً"),

    ("tsuu", "ثُوْ"),
    ("tsii", "ثِيْ"),
    ("tsaa", "ثَا"),
    ("tsuN", "ثٌ"),
    ("tsiN", "ثٍ"),
    ("tsaN", "ثً"),

    ("chu", "خُ"),
    ("chi", "خِ"),
    ("cho", "خَ"),

    ("dhu", "ظُ"),
    ("dhi", "ظِ"),
    ("dho", "ظَ"),

    ("dlu", "ضُ"),
    ("dli", "ضِ"),
    ("dlo", "ضَ"),

    ("dzu", "ذُ"),
    ("dzi", "ذِ"),
    ("dza", "ذَ"),

    ("ghu", "غُ"),
    ("ghi", "غِ"),
    ("gho", "غَ"),

    ("khu", "حُ"),
    ("khi", "حِ"),
    ("kha", "حَ"),

    ("shu", "صُ"),
    ("shi", "صِ"),
    ("sho", "صَ"),

    ("syu", "شُ"),
    ("syi", "شِ"),
    ("sya", "شَ"),

    ("thu", "طُ"),
    ("thi", "طِ"),
    ("tho", "طَ"),

    ("tsu", "ثُ"),
    ("tsi", "ثِ"),
    ("tsa", "ثَ"),
];

/// Single consonants with long vowel, tanwīn, or short vowel.
pub(super) const CONSONANTS: &[(&str, &str)] = &[
    ("tuu", "تُوْ"),
    ("tii", "تِيْ"),
    ("taa", "تَا"),
    ("tuN", "تٌ"),
    ("tiN", "تٍ"),
    ("taN", "تً"),

    ("buu", "بُوْ"),
    ("bii", "بِيْ"),
    ("baa", "بَا"),
    ("buN", "بٌ"),
    ("biN", "بٍ"),
    ("baN", "بً"),

    ("duu", "دُوْ"),
    ("dii", "دِيْ"),
    ("daa", "دَا"),
    ("duN", "دٌ"),
    ("diN", "دٍ"),
    ("daN", "دً"),

    ("fuu", "فُوْ"),
    ("fii", "فِيْ"),
    ("faa", "فَا"),
    ("fuN", "فٌ"),
    ("fiN", "فٍ"),
    ("faN", "فً"),

    ("huu", "هُوْ"),
    ("hii", "هِيْ"),
    ("haa", "هَا"),
    ("huN", "هٌ"),
    ("hiN", "هٍ"),
    ("haN", "هً"),

    ("juu", "جُوْ"),
    ("jii", "جِيْ"),
    ("jaa", "جَا"),
    ("juN", "جٌ"),
    ("jiN", "جٍ"),
    ("jaN", "جً"),

    ("kuu", "كُوْ"),
    ("kii", "كِيْ"),
    ("kaa", "كَا"),
    ("kuN", "كٌ"),
    ("kiN", "كٍ"),
    ("kaN", "كً"),

    ("luu", "لُوْ"),
    ("lii", "لِيْ"),
    ("laa", "لَا"),
    ("luN", "لٌ"),
    ("liN", "لٍ"),
    ("laN", "لً"),

    ("muu", "مُوْ"),
    ("mii", "مِيْ"),
    ("maa", "مَا"),
    ("muN", "مٌ"),
    ("miN", "مٍ"),
    ("maN", "مً"),

    ("nuu", "نُوْ"),
    ("nii", "نِيْ"),
    ("naa", "نَا"),
    ("nuN", "نٌ"),
    ("niN", "نٍ"),
    ("naN", "نً"),

    ("quu", "قُوْ"),
    ("qii", "قِيْ"),
    ("qoo", "قَا"),
    ("quN", "قٌ"),
    ("qiN", "قٍ"),
    ("qon", "قً"),

    ("ruu", "رُوْ"),
    ("rii", "رِيْ"),
    ("roo", "رَا"),
    ("ruN", "رٌ"),
    ("riN", "رٍ"),
    ("ron", "رً"),

    ("suu", "سُوْ"),
    ("sii", "سِيْ"),
    ("saa", "سَا"),
    ("suN", "سٌ"),
    ("siN", "سٍ"),
    ("saN", "سً"),

    ("wuu", "وُوْ"),
    ("wii", "وِيْ"),
    ("waa", "وَا"),
    ("wuN", "وٌ"),
    ("wiN", "وٍ"),
    ("waN", "وً"),

    ("yuu", "يُوْ"),
    ("yii", "يِيْ"),
    ("yaa", "يَا"),
    ("yuN", "يٌ"),
    ("yiN", "يٍ"),
    ("yaN", "يً"),

    ("zuu", "زُوْ"),
    ("zii", "زِيْ"),
    ("zaa", "زَا"),
    ("zuN", "زٌ"),
    ("ziN", "زٍ"),
    ("zaN", "زً"),

    ("'uu", "عُوْ"),
    ("'ii", "عِيْ"),
    ("'aa", "عَا"),
    ("'uN", "عٌ"),
    ("'iN", "عٍ"),
    ("'aN", "عً"),

    ("tu", "تُ"),
    ("ti", "تِ"),
    ("ta", "تَ"),

    ("bu", "بُ"),
    ("bi", "بِ"),
    ("ba", "بَ"),

    ("du", "دُ"),
    ("di", "دِ"),
    ("da", "دَ"),

    ("fu", "فُ"),
    ("fi", "فِ"),
    ("fa", "فَ"),

    ("hu", "هُ"),
    ("hi", "هِ"),
    ("ha", "هَ"),

    ("ju", "جُ"),
    ("ji", "جِ"),
    ("ja", "جَ"),

    ("ku", "كُ"),
    ("ki", "كِ"),
    ("ka", "كَ"),

    ("lu", "لُ"),
    ("li", "لِ"),
    ("la", "لَ"),

    ("mu", "مُ"),
    ("mi", "مِ"),
    ("ma", "مَ"),

    ("nu", "نُ"),
    ("ni", "نِ"),
    ("na", "نَ"),

    ("qu", "قُ"),
    ("qi", "قِ"),
    ("qo", "قَ"),

    ("ru", "رُ"),
    ("ri", "رِ"),
    ("ro", "رَ"),

    ("su", "سُ"),
    ("si", "سِ"),
    ("sa", "سَ"),

    ("wu", "وُ"),
    ("wi", "وِ"),
    ("wa", "وَ"),

    ("yu", "يُ"),
    ("yi", "يِ"),
    ("ya", "يَ"),

    ("zu", "زُ"),
    ("zi", "زِ"),
    ("za", "زَ"),

    ("'u", "عُ"),
    ("'i", "عِ"),
    ("'a", "عَ"),
];

/// Vowel-less consonants and digraphs.
pub(super) const SUKUN: &[(&str, &str)] = &[
    ("ch", "خْ"),
    ("dh", "ظْ"),
    ("dl", "ضْ"),
    ("dz", "ذْ"),
    ("gh", "غْ"),
    ("kh", "حْ"),
    ("sh", "صْ"),
    ("sy", "شْ"),
    ("th", "طْ"),
    ("ts", "ثْ"),
    ("t", "تْ"),
    ("b", "بْ"),
    ("d", "دْ"),
    ("f", "فْ"),
    ("h", "هْ"),
    ("j", "جْ"),
    ("k", "كْ"),
    ("l", "لْ"),
    ("m", "مْ"),
    ("n", "نْ"),
    ("q", "قْ"),
    ("r", "رْ"),
    ("s", "سْ"),
    ("w", "وْ"),
    ("y", "يْ"),
    ("z", "زْ"),
    ("'", "عْ"),
];

/// Bare vowels: uppercase seats a hamza on the line, lowercase on alif.
pub(super) const VOWELS: &[(&str, &str)] = &[
    ("AN", "ءً"),
    ("IN", "ءٍ"),
    ("UN", "ءٌ"),
    ("A", "ءَ"),
    ("I", "ءِ"),
    ("U", "ءُ"),
    ("aN", "أً"),
    ("iN", "إٍ"),
    ("uN", "أٌ"),
    ("a", "أَ"),
    ("i", "إِ"),
    ("u", "أُ"),
];
