//! Static Mandarin syllable data.
//!
//! A Mandarin syllable is an initial sound (sheng, 声母) followed by a
//! final (yun, 韵母); either part may be absent in places where the other
//! determines the sound. The table in this module enumerates every valid
//! romanized syllable together with its Bopomofo spelling and its
//! (sheng, yun) identifiers, which are the keys the phrase dictionaries
//! are indexed by.

use std::fmt::Display;

use thiserror::Error;

use crate::parser::Options;

mod table;

/// Initial sound (sheng) identifiers.
///
/// `Zero` marks syllables that start directly with a vowel, e.g. `an`.
/// The numbering is shared with the on-disk user dictionary, so variants
/// must never be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Initial {
    Zero = 0,
    B = 1,
    C,
    Ch,
    D,
    F,
    G,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    Sh,
    T,
    W,
    X,
    Y,
    Z,
    Zh,
}

/// Final (yun) identifiers, numbered after the initials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Final {
    A = 24,
    Ai,
    An,
    Ang,
    Ao,
    E,
    Ei,
    En,
    Eng,
    Er,
    I,
    Ia,
    Ian,
    Iang,
    Iao,
    Ie,
    In,
    Ing,
    Iong,
    Iu,
    O,
    Ong,
    Ou,
    U,
    Ua,
    Uai,
    Uan,
    Uang,
    Ue,
    Ui,
    Un,
    Uo,
    V,
}

const INITIALS: [Initial; 24] = {
    use Initial::*;
    [
        Zero, B, C, Ch, D, F, G, H, J, K, L, M, N, P, Q, R, S, Sh, T, W, X, Y, Z, Zh,
    ]
};

const FINALS: [Final; 33] = {
    use Final::*;
    [
        A, Ai, An, Ang, Ao, E, Ei, En, Eng, Er, I, Ia, Ian, Iang, Iao, Ie, In, Ing, Iong, Iu, O,
        Ong, Ou, U, Ua, Uai, Uan, Uang, Ue, Ui, Un, Uo, V,
    ]
};

/// The error type returned when decoding a stored syllable id fails.
#[derive(Error, Debug)]
#[error("invalid syllable id {id}")]
pub struct DecodeIdError {
    pub id: u8,
}

impl Initial {
    pub fn from_id(id: u8) -> Result<Initial, DecodeIdError> {
        INITIALS
            .get(id as usize)
            .copied()
            .ok_or(DecodeIdError { id })
    }

    /// Pushes the initials this one also matches under the enabled fuzzy
    /// options. `l` can have two peers (`n` and `r`), everything else at
    /// most one.
    pub fn push_fuzzy_peers(self, options: Options, out: &mut Vec<Initial>) {
        use Initial::*;
        let mut peer = |bit: Options, initial: Initial| {
            if options.contains(bit) {
                out.push(initial);
            }
        };
        match self {
            C => peer(Options::FUZZY_C_CH, Ch),
            Ch => peer(Options::FUZZY_CH_C, C),
            Z => peer(Options::FUZZY_Z_ZH, Zh),
            Zh => peer(Options::FUZZY_ZH_Z, Z),
            S => peer(Options::FUZZY_S_SH, Sh),
            Sh => peer(Options::FUZZY_SH_S, S),
            F => peer(Options::FUZZY_F_H, H),
            H => peer(Options::FUZZY_H_F, F),
            K => peer(Options::FUZZY_K_G, G),
            G => peer(Options::FUZZY_G_K, K),
            N => peer(Options::FUZZY_N_L, L),
            R => peer(Options::FUZZY_R_L, L),
            L => {
                peer(Options::FUZZY_L_N, N);
                peer(Options::FUZZY_L_R, R);
            }
            _ => (),
        }
    }
}

impl Final {
    pub fn from_id(id: u8) -> Result<Final, DecodeIdError> {
        let index = (id as usize).wrapping_sub(Final::A as usize);
        FINALS.get(index).copied().ok_or(DecodeIdError { id })
    }

    /// Returns the final this one also matches under the enabled fuzzy
    /// options. The nasal pairs an/ang, en/eng and in/ing extend to their
    /// glided forms ian/iang and uan/uang.
    pub fn fuzzy_peer(self, options: Options) -> Option<Final> {
        use Final::*;
        let peer = |bit: Options, fina: Final| options.contains(bit).then_some(fina);
        match self {
            An => peer(Options::FUZZY_AN_ANG, Ang),
            Ang => peer(Options::FUZZY_ANG_AN, An),
            Ian => peer(Options::FUZZY_AN_ANG, Iang),
            Iang => peer(Options::FUZZY_ANG_AN, Ian),
            Uan => peer(Options::FUZZY_AN_ANG, Uang),
            Uang => peer(Options::FUZZY_ANG_AN, Uan),
            En => peer(Options::FUZZY_EN_ENG, Eng),
            Eng => peer(Options::FUZZY_ENG_EN, En),
            In => peer(Options::FUZZY_IN_ING, Ing),
            Ing => peer(Options::FUZZY_ING_IN, In),
            _ => None,
        }
    }
}

/// The (sheng, yun) key of one dictionary syllable.
///
/// Learned phrases are persisted as a sequence of these, two bytes per
/// syllable. `yun` is `None` only for synthetic entries built from
/// incomplete input; dictionary rows always carry both halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SyllableKey {
    pub sheng: Initial,
    pub yun: Option<Final>,
}

impl SyllableKey {
    pub fn new(sheng: Initial, yun: Final) -> SyllableKey {
        SyllableKey {
            sheng,
            yun: Some(yun),
        }
    }

    pub fn encode(self) -> [u8; 2] {
        [self.sheng as u8, self.yun.map_or(0, |y| y as u8)]
    }

    pub fn decode(bytes: [u8; 2]) -> Result<SyllableKey, DecodeIdError> {
        let sheng = Initial::from_id(bytes[0])?;
        let yun = match bytes[1] {
            0 => None,
            id => Some(Final::from_id(id)?),
        };
        Ok(SyllableKey { sheng, yun })
    }
}

/// One entry of the static syllable table.
#[derive(Debug, PartialEq)]
pub struct Syllable {
    /// Canonical romanized spelling, e.g. `"zhuang"`.
    pub text: &'static str,
    /// Bopomofo spelling, e.g. `"ㄓㄨㄤ"`. Empty for the few initials that
    /// have no symbol of their own (`y`, `w`).
    pub bopomofo: &'static str,
    pub sheng: Initial,
    pub yun: Option<Final>,
    pub flags: u32,
}

impl Syllable {
    /// Marks an initial-only entry that is accepted when the
    /// `INCOMPLETE_PINYIN` option is enabled.
    pub const INCOMPLETE: u32 = 1;

    pub fn is_incomplete(&self) -> bool {
        self.flags & Syllable::INCOMPLETE != 0
    }

    pub fn key(&self) -> SyllableKey {
        SyllableKey {
            sheng: self.sheng,
            yun: self.yun,
        }
    }

    /// Looks up a syllable by its romanized spelling.
    pub fn from_text(text: &str) -> Option<&'static Syllable> {
        table::SYLLABLES.iter().find(|s| s.text == text)
    }

    /// Looks up the initial-only entry of `sheng`, if it has one.
    pub fn incomplete(sheng: Initial) -> Option<&'static Syllable> {
        table::SYLLABLES
            .iter()
            .find(|s| s.is_incomplete() && s.sheng == sheng)
    }

    /// Looks up a complete syllable by its (sheng, yun) pair, widening the
    /// search by the fuzzy options and the v→u correction when the exact
    /// pair does not spell a syllable.
    pub fn from_ids(sheng: Initial, yun: Final, options: Options) -> Option<&'static Syllable> {
        let exact = |sheng: Initial, yun: Final| {
            table::SYLLABLES
                .iter()
                .find(|s| !s.is_incomplete() && s.sheng == sheng && s.yun == Some(yun))
        };
        if let Some(found) = exact(sheng, yun) {
            return Some(found);
        }

        let mut shengs = vec![sheng];
        sheng.push_fuzzy_peers(options, &mut shengs);
        let mut yuns = vec![yun];
        if let Some(peer) = yun.fuzzy_peer(options) {
            yuns.push(peer);
        }
        for &s in &shengs {
            for &y in &yuns {
                if s == sheng && y == yun {
                    continue;
                }
                if let Some(found) = exact(s, y) {
                    return Some(found);
                }
            }
        }

        // v typed after j/q/x/y spells the u-written ü syllable.
        if yun == Final::V && options.contains(Options::CORRECT_V_TO_U) {
            if let Initial::J | Initial::Q | Initial::X | Initial::Y = sheng {
                return exact(sheng, Final::U);
            }
        }
        None
    }

    /// Looks up a syllable by its Bopomofo spelling. Complete syllables
    /// win over initial-only entries that share a symbol (a lone ㄓ is
    /// `zhi`, not an unfinished `zh`).
    pub fn from_bopomofo(glyphs: &str) -> Option<&'static Syllable> {
        if glyphs.is_empty() {
            return None;
        }
        table::SYLLABLES.iter().find(|s| s.bopomofo == glyphs)
    }
}

impl Display for Syllable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// One parsed syllable over the raw ASCII buffer.
///
/// `begin` and `len` index the keystrokes that produced the syllable, so
/// consecutive tokens are non-overlapping and strictly increasing in
/// `begin`. `len` may differ from the descriptor's spelling length when a
/// typo correction rewrote the keystrokes or the input was a two-key
/// double pinyin code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyllableToken {
    pub syllable: &'static Syllable,
    pub begin: usize,
    pub len: usize,
}

impl SyllableToken {
    pub fn new(syllable: &'static Syllable, begin: usize, len: usize) -> SyllableToken {
        SyllableToken {
            syllable,
            begin,
            len,
        }
    }

    /// The raw-buffer offset one past this token.
    pub fn end(&self) -> usize {
        self.begin + self.len
    }
}
