use vocab_core::model::{Catalog, EntryDraft, EntryValidationError};

/// The bundled Chinese→Hakka vocabulary: 39 entries, each with a recorded
/// audio file shipped next to the binary.
const ENTRIES: &[(&str, &str, &str)] = &[
    ("你好", "ngi ho", "audio/ngi_ho.m4a"),
    ("謝謝", "an zii se", "audio/an_zii_se.m4a"),
    ("再見", "zai jien", "audio/zai_jien.mp3"),
    ("早安", "zao an", "audio/zao_an.mp3"),
    ("午安", "ngou an", "audio/ngou_an.mp3"),
    ("晚安", "ban an", "audio/ban_an.mp3"),
    ("水", "chui", "audio/chui.mp3"),
    ("火", "foi", "audio/foi.mp3"),
    ("吃", "sik", "audio/sik.mp3"),
    ("喝", "ham", "audio/ham.mp3"),
    ("學習", "hok sip", "audio/hok_sip.mp3"),
    ("請", "qin", "audio/qin.mp3"),
    ("對不起", "te pu qi", "audio/te_pu_qi.mp3"),
    ("是", "si", "audio/si.mp3"),
    ("不是", "m si", "audio/m_si.mp3"),
    ("飯", "pan", "audio/pan.mp3"),
    ("買", "mai", "audio/mai.mp3"),
    ("賣", "mai vun", "audio/mai_vun.mp3"),
    ("貴", "gui", "audio/gui.mp3"),
    ("便宜", "pien yi", "audio/pien_yi.mp3"),
    ("這個", "li ge", "audio/li_ge.mp3"),
    ("那個", "ga ge", "audio/ga_ge.mp3"),
    ("在哪裡", "di bin du", "audio/di_bin_du.mp3"),
    ("多少", "toi to", "audio/toi_to.mp3"),
    ("我", "ngai", "audio/ngai.mp3"),
    ("你", "ngi", "audio/ngi.mp3"),
    ("他", "hi", "audio/hi.mp3"),
    ("我們", "ngai do", "audio/ngai_do.mp3"),
    ("今天", "gim zhin", "audio/gim_zhin.mp3"),
    ("明天", "me gin", "audio/me_gin.mp3"),
    ("好", "ho", "audio/ho.mp3"),
    ("不用客氣", "m yong hak qi", "audio/m_yong_hak_qi.mp3"),
    ("聽不懂", "ngai m dong", "audio/ngai_m_dong.mp3"),
    ("我愛你", "ngai oi ngi", "audio/ngai_oi_ngi.mp3"),
    ("你食飽無？", "ngi sik pan mo?", "audio/ngi_sik_pan_mo.mp3"),
    ("這個多少錢？", "li ge toi to ngien?", "audio/li_ge_toi_to_ngien.mp3"),
    ("請再說一次。", "qin zoi so it ci.", "audio/qin_zoi_so_it_ci.mp3"),
    ("我聽不懂客語。", "ngai m dong hak ngi.", "audio/ngai_m_dong_hak_ngi.mp3"),
    ("謝謝你幫忙！", "to sia ngi bong mang!", "audio/to_sia_ngi_bong_mang.mp3"),
];

/// Build the built-in catalog, validating every bundled entry.
pub fn catalog() -> Result<Catalog, EntryValidationError> {
    let mut entries = Vec::with_capacity(ENTRIES.len());
    for (source, target, audio) in ENTRIES {
        entries.push(EntryDraft::with_audio(*source, *target, *audio).validate()?);
    }
    Ok(Catalog::new(entries))
}
