//! Simplified to Traditional character conversion.
//!
//! A stateless longest-match mapping: two-character entries first, so
//! ambiguous characters convert correctly in the words that disambiguate
//! them (头发 → 頭髮 although 发 alone is 發), then per character.
//! Characters without an entry pass through unchanged. The embedded
//! table covers the frequent simplifications; extend `CHARS` when the
//! lexicon grows.

/// Converts `input` to Traditional characters.
pub fn simp_to_trad(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(first) = chars.next() {
        if let Some(&second) = chars.peek() {
            let pair = [first, second].iter().collect::<String>();
            if let Some(&(_, trad)) = WORDS.iter().find(|(simp, _)| *simp == pair) {
                out.push_str(trad);
                chars.next();
                continue;
            }
        }
        match CHARS.iter().find(|(simp, _)| *simp == first) {
            Some(&(_, trad)) => out.push(trad),
            None => out.push(first),
        }
    }
    out
}

/// Two-character words whose conversion differs from the per-character
/// mapping.
const WORDS: &[(&str, &str)] = &[
    ("头发", "頭髮"),
    ("理发", "理髮"),
    ("皇后", "皇后"),
    ("面条", "麵條"),
    ("面包", "麵包"),
    ("干杯", "乾杯"),
    ("干净", "乾淨"),
];

#[rustfmt::skip]
const CHARS: &[(char, char)] = &[
    ('爱', '愛'), ('办', '辦'), ('帮', '幫'), ('报', '報'), ('贝', '貝'),
    ('备', '備'), ('笔', '筆'), ('边', '邊'), ('变', '變'), ('标', '標'),
    ('别', '別'), ('宾', '賓'), ('才', '纔'), ('参', '參'), ('层', '層'),
    ('产', '產'), ('长', '長'), ('尝', '嘗'), ('车', '車'), ('彻', '徹'),
    ('尘', '塵'), ('衬', '襯'), ('称', '稱'), ('惩', '懲'), ('迟', '遲'),
    ('冲', '沖'), ('虫', '蟲'), ('筹', '籌'), ('处', '處'), ('传', '傳'),
    ('疮', '瘡'), ('辞', '辭'), ('从', '從'), ('聪', '聰'), ('达', '達'),
    ('带', '帶'), ('单', '單'), ('当', '當'), ('党', '黨'), ('导', '導'),
    ('灯', '燈'), ('敌', '敵'), ('电', '電'), ('东', '東'), ('动', '動'),
    ('断', '斷'), ('对', '對'), ('队', '隊'), ('夺', '奪'), ('儿', '兒'),
    ('尔', '爾'), ('发', '發'), ('飞', '飛'), ('费', '費'), ('风', '風'),
    ('冯', '馮'), ('复', '復'), ('盖', '蓋'), ('干', '幹'), ('赶', '趕'),
    ('个', '個'), ('给', '給'), ('龚', '龔'), ('宫', '宮'), ('贡', '貢'),
    ('挂', '掛'), ('关', '關'), ('观', '觀'), ('广', '廣'), ('龟', '龜'),
    ('国', '國'), ('过', '過'), ('还', '還'), ('汉', '漢'), ('号', '號'),
    ('后', '後'), ('华', '華'), ('画', '畫'), ('话', '話'), ('欢', '歡'),
    ('环', '環'), ('换', '換'), ('会', '會'), ('汇', '匯'), ('击', '擊'),
    ('机', '機'), ('积', '積'), ('纪', '紀'), ('继', '繼'),
    ('价', '價'), ('间', '間'), ('简', '簡'), ('见', '見'), ('键', '鍵'),
    ('将', '將'), ('讲', '講'), ('节', '節'), ('紧', '緊'), ('进', '進'),
    ('惊', '驚'), ('经', '經'), ('旧', '舊'), ('举', '舉'), ('剧', '劇'),
    ('据', '據'), ('觉', '覺'), ('军', '軍'), ('开', '開'), ('课', '課'),
    ('况', '況'), ('亏', '虧'), ('来', '來'), ('兰', '蘭'),
    ('蓝', '藍'), ('劳', '勞'), ('乐', '樂'), ('类', '類'), ('离', '離'),
    ('礼', '禮'), ('里', '裡'), ('历', '歷'), ('丽', '麗'), ('连', '連'),
    ('联', '聯'), ('脸', '臉'), ('练', '練'), ('粮', '糧'), ('两', '兩'),
    ('辆', '輛'), ('灵', '靈'), ('龄', '齡'), ('刘', '劉'), ('龙', '龍'),
    ('楼', '樓'), ('录', '錄'), ('虑', '慮'), ('罗', '羅'), ('妈', '媽'),
    ('马', '馬'), ('吗', '嗎'), ('买', '買'), ('卖', '賣'), ('满', '滿'),
    ('么', '麼'), ('门', '門'), ('们', '們'), ('梦', '夢'),
    ('庙', '廟'), ('灭', '滅'), ('鸣', '鳴'), ('内', '內'), ('脑', '腦'),
    ('鸟', '鳥'), ('农', '農'), ('欧', '歐'), ('盘', '盤'), ('赔', '賠'),
    ('频', '頻'), ('齐', '齊'), ('气', '氣'),
    ('钱', '錢'), ('枪', '槍'), ('墙', '牆'), ('桥', '橋'), ('亲', '親'),
    ('轻', '輕'), ('请', '請'), ('庆', '慶'), ('穷', '窮'), ('区', '區'),
    ('确', '確'), ('让', '讓'), ('热', '熱'), ('认', '認'), ('软', '軟'),
    ('赛', '賽'), ('伤', '傷'), ('绳', '繩'), ('圣', '聖'), ('胜', '勝'),
    ('师', '師'), ('时', '時'), ('识', '識'), ('实', '實'), ('势', '勢'),
    ('适', '適'), ('释', '釋'), ('寿', '壽'), ('书', '書'), ('术', '術'),
    ('树', '樹'), ('数', '數'), ('双', '雙'), ('说', '說'), ('丝', '絲'),
    ('岁', '歲'), ('孙', '孫'), ('态', '態'), ('叹', '嘆'), ('汤', '湯'),
    ('讨', '討'), ('腾', '騰'), ('条', '條'), ('铁', '鐵'), ('听', '聽'),
    ('头', '頭'), ('图', '圖'), ('团', '團'), ('万', '萬'), ('为', '為'),
    ('伟', '偉'), ('卫', '衛'), ('温', '溫'), ('闻', '聞'), ('问', '問'),
    ('乌', '烏'), ('无', '無'), ('误', '誤'), ('习', '習'),
    ('戏', '戲'), ('细', '細'), ('虾', '蝦'), ('吓', '嚇'),
    ('现', '現'), ('县', '縣'), ('乡', '鄉'), ('详', '詳'), ('响', '響'),
    ('项', '項'), ('写', '寫'), ('谢', '謝'), ('兴', '興'), ('许', '許'),
    ('续', '續'), ('选', '選'), ('学', '學'), ('压', '壓'), ('亚', '亞'),
    ('严', '嚴'), ('盐', '鹽'), ('阳', '陽'), ('养', '養'), ('样', '樣'),
    ('页', '頁'), ('业', '業'), ('叶', '葉'), ('医', '醫'), ('亿', '億'),
    ('义', '義'), ('忆', '憶'), ('艺', '藝'), ('议', '議'), ('异', '異'),
    ('译', '譯'), ('阴', '陰'), ('银', '銀'), ('饮', '飲'), ('应', '應'),
    ('营', '營'), ('优', '優'), ('邮', '郵'), ('游', '遊'), ('于', '於'),
    ('鱼', '魚'), ('与', '與'), ('语', '語'), ('狱', '獄'), ('预', '預'),
    ('员', '員'), ('园', '園'), ('远', '遠'), ('愿', '願'), ('约', '約'),
    ('岳', '嶽'), ('云', '雲'), ('杂', '雜'), ('灾', '災'), ('赞', '贊'),
    ('脏', '髒'), ('择', '擇'), ('则', '則'), ('泽', '澤'), ('贼', '賊'),
    ('张', '張'), ('账', '賬'), ('赵', '趙'), ('这', '這'), ('针', '針'),
    ('镇', '鎮'), ('争', '爭'), ('证', '證'), ('郑', '鄭'), ('织', '織'),
    ('职', '職'), ('执', '執'), ('纸', '紙'), ('质', '質'),
    ('钟', '鐘'), ('种', '種'), ('众', '眾'), ('猪', '豬'),
    ('嘱', '囑'), ('专', '專'), ('转', '轉'), ('装', '裝'), ('状', '狀'),
    ('准', '準'), ('资', '資'), ('总', '總'), ('邹', '鄒'), ('组', '組'),
];

#[cfg(test)]
mod tests {
    use super::simp_to_trad;

    #[test]
    fn single_characters_convert() {
        assert_eq!("媽媽", simp_to_trad("妈妈"));
        assert_eq!("學習中文", simp_to_trad("学习中文"));
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!("你好", simp_to_trad("你好"));
        assert_eq!("AA制", simp_to_trad("AA制"));
        assert_eq!("hello 世界", simp_to_trad("hello 世界"));
    }

    #[test]
    fn words_win_over_characters() {
        assert_eq!("頭髮", simp_to_trad("头发"));
        assert_eq!("發頭", simp_to_trad("发头"));
        assert_eq!("麵條", simp_to_trad("面条"));
        // 面 alone keeps its shape.
        assert_eq!("面", simp_to_trad("面"));
    }
}
