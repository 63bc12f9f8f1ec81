//! The syllable inventory.
//!
//! Complete syllables come first; the initial-only entries used for
//! incomplete input sit at the end so that spellings shared between the
//! two groups (ㄓ is both `zhi` and a bare `zh`) resolve to the complete
//! syllable.

use super::{Final::*, Initial::*, Syllable};

macro_rules! syl {
    ($text:literal, $bpmf:literal, $sheng:ident, $yun:ident) => {
        Syllable {
            text: $text,
            bopomofo: $bpmf,
            sheng: $sheng,
            yun: Some($yun),
            flags: 0,
        }
    };
    ($text:literal, $bpmf:literal, $sheng:ident) => {
        Syllable {
            text: $text,
            bopomofo: $bpmf,
            sheng: $sheng,
            yun: None,
            flags: Syllable::INCOMPLETE,
        }
    };
}

#[rustfmt::skip]
pub(super) const SYLLABLES: &[Syllable] = &[
    // vowel-initial
    syl!("a", "ㄚ", Zero, A),
    syl!("ai", "ㄞ", Zero, Ai),
    syl!("an", "ㄢ", Zero, An),
    syl!("ang", "ㄤ", Zero, Ang),
    syl!("ao", "ㄠ", Zero, Ao),
    syl!("e", "ㄜ", Zero, E),
    syl!("ei", "ㄟ", Zero, Ei),
    syl!("en", "ㄣ", Zero, En),
    syl!("eng", "ㄥ", Zero, Eng),
    syl!("er", "ㄦ", Zero, Er),
    syl!("o", "ㄛ", Zero, O),
    syl!("ou", "ㄡ", Zero, Ou),
    // b
    syl!("ba", "ㄅㄚ", B, A),
    syl!("bai", "ㄅㄞ", B, Ai),
    syl!("ban", "ㄅㄢ", B, An),
    syl!("bang", "ㄅㄤ", B, Ang),
    syl!("bao", "ㄅㄠ", B, Ao),
    syl!("bei", "ㄅㄟ", B, Ei),
    syl!("ben", "ㄅㄣ", B, En),
    syl!("beng", "ㄅㄥ", B, Eng),
    syl!("bi", "ㄅㄧ", B, I),
    syl!("bian", "ㄅㄧㄢ", B, Ian),
    syl!("biao", "ㄅㄧㄠ", B, Iao),
    syl!("bie", "ㄅㄧㄝ", B, Ie),
    syl!("bin", "ㄅㄧㄣ", B, In),
    syl!("bing", "ㄅㄧㄥ", B, Ing),
    syl!("bo", "ㄅㄛ", B, O),
    syl!("bu", "ㄅㄨ", B, U),
    // p
    syl!("pa", "ㄆㄚ", P, A),
    syl!("pai", "ㄆㄞ", P, Ai),
    syl!("pan", "ㄆㄢ", P, An),
    syl!("pang", "ㄆㄤ", P, Ang),
    syl!("pao", "ㄆㄠ", P, Ao),
    syl!("pei", "ㄆㄟ", P, Ei),
    syl!("pen", "ㄆㄣ", P, En),
    syl!("peng", "ㄆㄥ", P, Eng),
    syl!("pi", "ㄆㄧ", P, I),
    syl!("pian", "ㄆㄧㄢ", P, Ian),
    syl!("piao", "ㄆㄧㄠ", P, Iao),
    syl!("pie", "ㄆㄧㄝ", P, Ie),
    syl!("pin", "ㄆㄧㄣ", P, In),
    syl!("ping", "ㄆㄧㄥ", P, Ing),
    syl!("po", "ㄆㄛ", P, O),
    syl!("pou", "ㄆㄡ", P, Ou),
    syl!("pu", "ㄆㄨ", P, U),
    // m
    syl!("ma", "ㄇㄚ", M, A),
    syl!("mai", "ㄇㄞ", M, Ai),
    syl!("man", "ㄇㄢ", M, An),
    syl!("mang", "ㄇㄤ", M, Ang),
    syl!("mao", "ㄇㄠ", M, Ao),
    syl!("me", "ㄇㄜ", M, E),
    syl!("mei", "ㄇㄟ", M, Ei),
    syl!("men", "ㄇㄣ", M, En),
    syl!("meng", "ㄇㄥ", M, Eng),
    syl!("mi", "ㄇㄧ", M, I),
    syl!("mian", "ㄇㄧㄢ", M, Ian),
    syl!("miao", "ㄇㄧㄠ", M, Iao),
    syl!("mie", "ㄇㄧㄝ", M, Ie),
    syl!("min", "ㄇㄧㄣ", M, In),
    syl!("ming", "ㄇㄧㄥ", M, Ing),
    syl!("miu", "ㄇㄧㄡ", M, Iu),
    syl!("mo", "ㄇㄛ", M, O),
    syl!("mou", "ㄇㄡ", M, Ou),
    syl!("mu", "ㄇㄨ", M, U),
    // f
    syl!("fa", "ㄈㄚ", F, A),
    syl!("fan", "ㄈㄢ", F, An),
    syl!("fang", "ㄈㄤ", F, Ang),
    syl!("fei", "ㄈㄟ", F, Ei),
    syl!("fen", "ㄈㄣ", F, En),
    syl!("feng", "ㄈㄥ", F, Eng),
    syl!("fo", "ㄈㄛ", F, O),
    syl!("fou", "ㄈㄡ", F, Ou),
    syl!("fu", "ㄈㄨ", F, U),
    // d
    syl!("da", "ㄉㄚ", D, A),
    syl!("dai", "ㄉㄞ", D, Ai),
    syl!("dan", "ㄉㄢ", D, An),
    syl!("dang", "ㄉㄤ", D, Ang),
    syl!("dao", "ㄉㄠ", D, Ao),
    syl!("de", "ㄉㄜ", D, E),
    syl!("dei", "ㄉㄟ", D, Ei),
    syl!("den", "ㄉㄣ", D, En),
    syl!("deng", "ㄉㄥ", D, Eng),
    syl!("di", "ㄉㄧ", D, I),
    syl!("dia", "ㄉㄧㄚ", D, Ia),
    syl!("dian", "ㄉㄧㄢ", D, Ian),
    syl!("diao", "ㄉㄧㄠ", D, Iao),
    syl!("die", "ㄉㄧㄝ", D, Ie),
    syl!("ding", "ㄉㄧㄥ", D, Ing),
    syl!("diu", "ㄉㄧㄡ", D, Iu),
    syl!("dong", "ㄉㄨㄥ", D, Ong),
    syl!("dou", "ㄉㄡ", D, Ou),
    syl!("du", "ㄉㄨ", D, U),
    syl!("duan", "ㄉㄨㄢ", D, Uan),
    syl!("dui", "ㄉㄨㄟ", D, Ui),
    syl!("dun", "ㄉㄨㄣ", D, Un),
    syl!("duo", "ㄉㄨㄛ", D, Uo),
    // t
    syl!("ta", "ㄊㄚ", T, A),
    syl!("tai", "ㄊㄞ", T, Ai),
    syl!("tan", "ㄊㄢ", T, An),
    syl!("tang", "ㄊㄤ", T, Ang),
    syl!("tao", "ㄊㄠ", T, Ao),
    syl!("te", "ㄊㄜ", T, E),
    syl!("teng", "ㄊㄥ", T, Eng),
    syl!("ti", "ㄊㄧ", T, I),
    syl!("tian", "ㄊㄧㄢ", T, Ian),
    syl!("tiao", "ㄊㄧㄠ", T, Iao),
    syl!("tie", "ㄊㄧㄝ", T, Ie),
    syl!("ting", "ㄊㄧㄥ", T, Ing),
    syl!("tong", "ㄊㄨㄥ", T, Ong),
    syl!("tou", "ㄊㄡ", T, Ou),
    syl!("tu", "ㄊㄨ", T, U),
    syl!("tuan", "ㄊㄨㄢ", T, Uan),
    syl!("tui", "ㄊㄨㄟ", T, Ui),
    syl!("tun", "ㄊㄨㄣ", T, Un),
    syl!("tuo", "ㄊㄨㄛ", T, Uo),
    // n
    syl!("na", "ㄋㄚ", N, A),
    syl!("nai", "ㄋㄞ", N, Ai),
    syl!("nan", "ㄋㄢ", N, An),
    syl!("nang", "ㄋㄤ", N, Ang),
    syl!("nao", "ㄋㄠ", N, Ao),
    syl!("ne", "ㄋㄜ", N, E),
    syl!("nei", "ㄋㄟ", N, Ei),
    syl!("nen", "ㄋㄣ", N, En),
    syl!("neng", "ㄋㄥ", N, Eng),
    syl!("ni", "ㄋㄧ", N, I),
    syl!("nian", "ㄋㄧㄢ", N, Ian),
    syl!("niang", "ㄋㄧㄤ", N, Iang),
    syl!("niao", "ㄋㄧㄠ", N, Iao),
    syl!("nie", "ㄋㄧㄝ", N, Ie),
    syl!("nin", "ㄋㄧㄣ", N, In),
    syl!("ning", "ㄋㄧㄥ", N, Ing),
    syl!("niu", "ㄋㄧㄡ", N, Iu),
    syl!("nong", "ㄋㄨㄥ", N, Ong),
    syl!("nou", "ㄋㄡ", N, Ou),
    syl!("nu", "ㄋㄨ", N, U),
    syl!("nuan", "ㄋㄨㄢ", N, Uan),
    syl!("nun", "ㄋㄨㄣ", N, Un),
    syl!("nuo", "ㄋㄨㄛ", N, Uo),
    syl!("nv", "ㄋㄩ", N, V),
    syl!("nve", "ㄋㄩㄝ", N, Ue),
    // l
    syl!("la", "ㄌㄚ", L, A),
    syl!("lai", "ㄌㄞ", L, Ai),
    syl!("lan", "ㄌㄢ", L, An),
    syl!("lang", "ㄌㄤ", L, Ang),
    syl!("lao", "ㄌㄠ", L, Ao),
    syl!("le", "ㄌㄜ", L, E),
    syl!("lei", "ㄌㄟ", L, Ei),
    syl!("leng", "ㄌㄥ", L, Eng),
    syl!("li", "ㄌㄧ", L, I),
    syl!("lia", "ㄌㄧㄚ", L, Ia),
    syl!("lian", "ㄌㄧㄢ", L, Ian),
    syl!("liang", "ㄌㄧㄤ", L, Iang),
    syl!("liao", "ㄌㄧㄠ", L, Iao),
    syl!("lie", "ㄌㄧㄝ", L, Ie),
    syl!("lin", "ㄌㄧㄣ", L, In),
    syl!("ling", "ㄌㄧㄥ", L, Ing),
    syl!("liu", "ㄌㄧㄡ", L, Iu),
    syl!("lo", "ㄌㄛ", L, O),
    syl!("long", "ㄌㄨㄥ", L, Ong),
    syl!("lou", "ㄌㄡ", L, Ou),
    syl!("lu", "ㄌㄨ", L, U),
    syl!("luan", "ㄌㄨㄢ", L, Uan),
    syl!("lun", "ㄌㄨㄣ", L, Un),
    syl!("luo", "ㄌㄨㄛ", L, Uo),
    syl!("lv", "ㄌㄩ", L, V),
    syl!("lve", "ㄌㄩㄝ", L, Ue),
    // g
    syl!("ga", "ㄍㄚ", G, A),
    syl!("gai", "ㄍㄞ", G, Ai),
    syl!("gan", "ㄍㄢ", G, An),
    syl!("gang", "ㄍㄤ", G, Ang),
    syl!("gao", "ㄍㄠ", G, Ao),
    syl!("ge", "ㄍㄜ", G, E),
    syl!("gei", "ㄍㄟ", G, Ei),
    syl!("gen", "ㄍㄣ", G, En),
    syl!("geng", "ㄍㄥ", G, Eng),
    syl!("gong", "ㄍㄨㄥ", G, Ong),
    syl!("gou", "ㄍㄡ", G, Ou),
    syl!("gu", "ㄍㄨ", G, U),
    syl!("gua", "ㄍㄨㄚ", G, Ua),
    syl!("guai", "ㄍㄨㄞ", G, Uai),
    syl!("guan", "ㄍㄨㄢ", G, Uan),
    syl!("guang", "ㄍㄨㄤ", G, Uang),
    syl!("gui", "ㄍㄨㄟ", G, Ui),
    syl!("gun", "ㄍㄨㄣ", G, Un),
    syl!("guo", "ㄍㄨㄛ", G, Uo),
    // k
    syl!("ka", "ㄎㄚ", K, A),
    syl!("kai", "ㄎㄞ", K, Ai),
    syl!("kan", "ㄎㄢ", K, An),
    syl!("kang", "ㄎㄤ", K, Ang),
    syl!("kao", "ㄎㄠ", K, Ao),
    syl!("ke", "ㄎㄜ", K, E),
    syl!("kei", "ㄎㄟ", K, Ei),
    syl!("ken", "ㄎㄣ", K, En),
    syl!("keng", "ㄎㄥ", K, Eng),
    syl!("kong", "ㄎㄨㄥ", K, Ong),
    syl!("kou", "ㄎㄡ", K, Ou),
    syl!("ku", "ㄎㄨ", K, U),
    syl!("kua", "ㄎㄨㄚ", K, Ua),
    syl!("kuai", "ㄎㄨㄞ", K, Uai),
    syl!("kuan", "ㄎㄨㄢ", K, Uan),
    syl!("kuang", "ㄎㄨㄤ", K, Uang),
    syl!("kui", "ㄎㄨㄟ", K, Ui),
    syl!("kun", "ㄎㄨㄣ", K, Un),
    syl!("kuo", "ㄎㄨㄛ", K, Uo),
    // h
    syl!("ha", "ㄏㄚ", H, A),
    syl!("hai", "ㄏㄞ", H, Ai),
    syl!("han", "ㄏㄢ", H, An),
    syl!("hang", "ㄏㄤ", H, Ang),
    syl!("hao", "ㄏㄠ", H, Ao),
    syl!("he", "ㄏㄜ", H, E),
    syl!("hei", "ㄏㄟ", H, Ei),
    syl!("hen", "ㄏㄣ", H, En),
    syl!("heng", "ㄏㄥ", H, Eng),
    syl!("hong", "ㄏㄨㄥ", H, Ong),
    syl!("hou", "ㄏㄡ", H, Ou),
    syl!("hu", "ㄏㄨ", H, U),
    syl!("hua", "ㄏㄨㄚ", H, Ua),
    syl!("huai", "ㄏㄨㄞ", H, Uai),
    syl!("huan", "ㄏㄨㄢ", H, Uan),
    syl!("huang", "ㄏㄨㄤ", H, Uang),
    syl!("hui", "ㄏㄨㄟ", H, Ui),
    syl!("hun", "ㄏㄨㄣ", H, Un),
    syl!("huo", "ㄏㄨㄛ", H, Uo),
    // j
    syl!("ji", "ㄐㄧ", J, I),
    syl!("jia", "ㄐㄧㄚ", J, Ia),
    syl!("jian", "ㄐㄧㄢ", J, Ian),
    syl!("jiang", "ㄐㄧㄤ", J, Iang),
    syl!("jiao", "ㄐㄧㄠ", J, Iao),
    syl!("jie", "ㄐㄧㄝ", J, Ie),
    syl!("jin", "ㄐㄧㄣ", J, In),
    syl!("jing", "ㄐㄧㄥ", J, Ing),
    syl!("jiong", "ㄐㄩㄥ", J, Iong),
    syl!("jiu", "ㄐㄧㄡ", J, Iu),
    syl!("ju", "ㄐㄩ", J, U),
    syl!("juan", "ㄐㄩㄢ", J, Uan),
    syl!("jue", "ㄐㄩㄝ", J, Ue),
    syl!("jun", "ㄐㄩㄣ", J, Un),
    // q
    syl!("qi", "ㄑㄧ", Q, I),
    syl!("qia", "ㄑㄧㄚ", Q, Ia),
    syl!("qian", "ㄑㄧㄢ", Q, Ian),
    syl!("qiang", "ㄑㄧㄤ", Q, Iang),
    syl!("qiao", "ㄑㄧㄠ", Q, Iao),
    syl!("qie", "ㄑㄧㄝ", Q, Ie),
    syl!("qin", "ㄑㄧㄣ", Q, In),
    syl!("qing", "ㄑㄧㄥ", Q, Ing),
    syl!("qiong", "ㄑㄩㄥ", Q, Iong),
    syl!("qiu", "ㄑㄧㄡ", Q, Iu),
    syl!("qu", "ㄑㄩ", Q, U),
    syl!("quan", "ㄑㄩㄢ", Q, Uan),
    syl!("que", "ㄑㄩㄝ", Q, Ue),
    syl!("qun", "ㄑㄩㄣ", Q, Un),
    // x
    syl!("xi", "ㄒㄧ", X, I),
    syl!("xia", "ㄒㄧㄚ", X, Ia),
    syl!("xian", "ㄒㄧㄢ", X, Ian),
    syl!("xiang", "ㄒㄧㄤ", X, Iang),
    syl!("xiao", "ㄒㄧㄠ", X, Iao),
    syl!("xie", "ㄒㄧㄝ", X, Ie),
    syl!("xin", "ㄒㄧㄣ", X, In),
    syl!("xing", "ㄒㄧㄥ", X, Ing),
    syl!("xiong", "ㄒㄩㄥ", X, Iong),
    syl!("xiu", "ㄒㄧㄡ", X, Iu),
    syl!("xu", "ㄒㄩ", X, U),
    syl!("xuan", "ㄒㄩㄢ", X, Uan),
    syl!("xue", "ㄒㄩㄝ", X, Ue),
    syl!("xun", "ㄒㄩㄣ", X, Un),
    // zh
    syl!("zha", "ㄓㄚ", Zh, A),
    syl!("zhai", "ㄓㄞ", Zh, Ai),
    syl!("zhan", "ㄓㄢ", Zh, An),
    syl!("zhang", "ㄓㄤ", Zh, Ang),
    syl!("zhao", "ㄓㄠ", Zh, Ao),
    syl!("zhe", "ㄓㄜ", Zh, E),
    syl!("zhei", "ㄓㄟ", Zh, Ei),
    syl!("zhen", "ㄓㄣ", Zh, En),
    syl!("zheng", "ㄓㄥ", Zh, Eng),
    syl!("zhi", "ㄓ", Zh, I),
    syl!("zhong", "ㄓㄨㄥ", Zh, Ong),
    syl!("zhou", "ㄓㄡ", Zh, Ou),
    syl!("zhu", "ㄓㄨ", Zh, U),
    syl!("zhua", "ㄓㄨㄚ", Zh, Ua),
    syl!("zhuai", "ㄓㄨㄞ", Zh, Uai),
    syl!("zhuan", "ㄓㄨㄢ", Zh, Uan),
    syl!("zhuang", "ㄓㄨㄤ", Zh, Uang),
    syl!("zhui", "ㄓㄨㄟ", Zh, Ui),
    syl!("zhun", "ㄓㄨㄣ", Zh, Un),
    syl!("zhuo", "ㄓㄨㄛ", Zh, Uo),
    // ch
    syl!("cha", "ㄔㄚ", Ch, A),
    syl!("chai", "ㄔㄞ", Ch, Ai),
    syl!("chan", "ㄔㄢ", Ch, An),
    syl!("chang", "ㄔㄤ", Ch, Ang),
    syl!("chao", "ㄔㄠ", Ch, Ao),
    syl!("che", "ㄔㄜ", Ch, E),
    syl!("chen", "ㄔㄣ", Ch, En),
    syl!("cheng", "ㄔㄥ", Ch, Eng),
    syl!("chi", "ㄔ", Ch, I),
    syl!("chong", "ㄔㄨㄥ", Ch, Ong),
    syl!("chou", "ㄔㄡ", Ch, Ou),
    syl!("chu", "ㄔㄨ", Ch, U),
    syl!("chua", "ㄔㄨㄚ", Ch, Ua),
    syl!("chuai", "ㄔㄨㄞ", Ch, Uai),
    syl!("chuan", "ㄔㄨㄢ", Ch, Uan),
    syl!("chuang", "ㄔㄨㄤ", Ch, Uang),
    syl!("chui", "ㄔㄨㄟ", Ch, Ui),
    syl!("chun", "ㄔㄨㄣ", Ch, Un),
    syl!("chuo", "ㄔㄨㄛ", Ch, Uo),
    // sh
    syl!("sha", "ㄕㄚ", Sh, A),
    syl!("shai", "ㄕㄞ", Sh, Ai),
    syl!("shan", "ㄕㄢ", Sh, An),
    syl!("shang", "ㄕㄤ", Sh, Ang),
    syl!("shao", "ㄕㄠ", Sh, Ao),
    syl!("she", "ㄕㄜ", Sh, E),
    syl!("shei", "ㄕㄟ", Sh, Ei),
    syl!("shen", "ㄕㄣ", Sh, En),
    syl!("sheng", "ㄕㄥ", Sh, Eng),
    syl!("shi", "ㄕ", Sh, I),
    syl!("shou", "ㄕㄡ", Sh, Ou),
    syl!("shu", "ㄕㄨ", Sh, U),
    syl!("shua", "ㄕㄨㄚ", Sh, Ua),
    syl!("shuai", "ㄕㄨㄞ", Sh, Uai),
    syl!("shuan", "ㄕㄨㄢ", Sh, Uan),
    syl!("shuang", "ㄕㄨㄤ", Sh, Uang),
    syl!("shui", "ㄕㄨㄟ", Sh, Ui),
    syl!("shun", "ㄕㄨㄣ", Sh, Un),
    syl!("shuo", "ㄕㄨㄛ", Sh, Uo),
    // r
    syl!("ran", "ㄖㄢ", R, An),
    syl!("rang", "ㄖㄤ", R, Ang),
    syl!("rao", "ㄖㄠ", R, Ao),
    syl!("re", "ㄖㄜ", R, E),
    syl!("ren", "ㄖㄣ", R, En),
    syl!("reng", "ㄖㄥ", R, Eng),
    syl!("ri", "ㄖ", R, I),
    syl!("rong", "ㄖㄨㄥ", R, Ong),
    syl!("rou", "ㄖㄡ", R, Ou),
    syl!("ru", "ㄖㄨ", R, U),
    syl!("rua", "ㄖㄨㄚ", R, Ua),
    syl!("ruan", "ㄖㄨㄢ", R, Uan),
    syl!("rui", "ㄖㄨㄟ", R, Ui),
    syl!("run", "ㄖㄨㄣ", R, Un),
    syl!("ruo", "ㄖㄨㄛ", R, Uo),
    // z
    syl!("za", "ㄗㄚ", Z, A),
    syl!("zai", "ㄗㄞ", Z, Ai),
    syl!("zan", "ㄗㄢ", Z, An),
    syl!("zang", "ㄗㄤ", Z, Ang),
    syl!("zao", "ㄗㄠ", Z, Ao),
    syl!("ze", "ㄗㄜ", Z, E),
    syl!("zei", "ㄗㄟ", Z, Ei),
    syl!("zen", "ㄗㄣ", Z, En),
    syl!("zeng", "ㄗㄥ", Z, Eng),
    syl!("zi", "ㄗ", Z, I),
    syl!("zong", "ㄗㄨㄥ", Z, Ong),
    syl!("zou", "ㄗㄡ", Z, Ou),
    syl!("zu", "ㄗㄨ", Z, U),
    syl!("zuan", "ㄗㄨㄢ", Z, Uan),
    syl!("zui", "ㄗㄨㄟ", Z, Ui),
    syl!("zun", "ㄗㄨㄣ", Z, Un),
    syl!("zuo", "ㄗㄨㄛ", Z, Uo),
    // c
    syl!("ca", "ㄘㄚ", C, A),
    syl!("cai", "ㄘㄞ", C, Ai),
    syl!("can", "ㄘㄢ", C, An),
    syl!("cang", "ㄘㄤ", C, Ang),
    syl!("cao", "ㄘㄠ", C, Ao),
    syl!("ce", "ㄘㄜ", C, E),
    syl!("cen", "ㄘㄣ", C, En),
    syl!("ceng", "ㄘㄥ", C, Eng),
    syl!("ci", "ㄘ", C, I),
    syl!("cong", "ㄘㄨㄥ", C, Ong),
    syl!("cou", "ㄘㄡ", C, Ou),
    syl!("cu", "ㄘㄨ", C, U),
    syl!("cuan", "ㄘㄨㄢ", C, Uan),
    syl!("cui", "ㄘㄨㄟ", C, Ui),
    syl!("cun", "ㄘㄨㄣ", C, Un),
    syl!("cuo", "ㄘㄨㄛ", C, Uo),
    // s
    syl!("sa", "ㄙㄚ", S, A),
    syl!("sai", "ㄙㄞ", S, Ai),
    syl!("san", "ㄙㄢ", S, An),
    syl!("sang", "ㄙㄤ", S, Ang),
    syl!("sao", "ㄙㄠ", S, Ao),
    syl!("se", "ㄙㄜ", S, E),
    syl!("sen", "ㄙㄣ", S, En),
    syl!("seng", "ㄙㄥ", S, Eng),
    syl!("si", "ㄙ", S, I),
    syl!("song", "ㄙㄨㄥ", S, Ong),
    syl!("sou", "ㄙㄡ", S, Ou),
    syl!("su", "ㄙㄨ", S, U),
    syl!("suan", "ㄙㄨㄢ", S, Uan),
    syl!("sui", "ㄙㄨㄟ", S, Ui),
    syl!("sun", "ㄙㄨㄣ", S, Un),
    syl!("suo", "ㄙㄨㄛ", S, Uo),
    // y
    syl!("ya", "ㄧㄚ", Y, A),
    syl!("yan", "ㄧㄢ", Y, An),
    syl!("yang", "ㄧㄤ", Y, Ang),
    syl!("yao", "ㄧㄠ", Y, Ao),
    syl!("ye", "ㄧㄝ", Y, E),
    syl!("yi", "ㄧ", Y, I),
    syl!("yin", "ㄧㄣ", Y, In),
    syl!("ying", "ㄧㄥ", Y, Ing),
    syl!("yo", "ㄧㄛ", Y, O),
    syl!("yong", "ㄩㄥ", Y, Ong),
    syl!("you", "ㄧㄡ", Y, Ou),
    syl!("yu", "ㄩ", Y, U),
    syl!("yuan", "ㄩㄢ", Y, Uan),
    syl!("yue", "ㄩㄝ", Y, Ue),
    syl!("yun", "ㄩㄣ", Y, Un),
    // w
    syl!("wa", "ㄨㄚ", W, A),
    syl!("wai", "ㄨㄞ", W, Ai),
    syl!("wan", "ㄨㄢ", W, An),
    syl!("wang", "ㄨㄤ", W, Ang),
    syl!("wei", "ㄨㄟ", W, Ei),
    syl!("wen", "ㄨㄣ", W, En),
    syl!("weng", "ㄨㄥ", W, Eng),
    syl!("wo", "ㄨㄛ", W, O),
    syl!("wu", "ㄨ", W, U),
    // initial-only entries, accepted under INCOMPLETE_PINYIN
    syl!("zh", "ㄓ", Zh),
    syl!("ch", "ㄔ", Ch),
    syl!("sh", "ㄕ", Sh),
    syl!("b", "ㄅ", B),
    syl!("p", "ㄆ", P),
    syl!("m", "ㄇ", M),
    syl!("f", "ㄈ", F),
    syl!("d", "ㄉ", D),
    syl!("t", "ㄊ", T),
    syl!("n", "ㄋ", N),
    syl!("l", "ㄌ", L),
    syl!("g", "ㄍ", G),
    syl!("k", "ㄎ", K),
    syl!("h", "ㄏ", H),
    syl!("j", "ㄐ", J),
    syl!("q", "ㄑ", Q),
    syl!("x", "ㄒ", X),
    syl!("r", "ㄖ", R),
    syl!("z", "ㄗ", Z),
    syl!("c", "ㄘ", C),
    syl!("s", "ㄙ", S),
    syl!("y", "", Y),
    syl!("w", "", W),
];
