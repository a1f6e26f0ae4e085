//! Safety tips.

use market_core::Language;

const TIPS_RU: [&str; 4] = [
    "Не переводите предоплату, пока не увидели товар",
    "Встречайтесь с продавцом в людном месте",
    "Проверяйте товар и документы перед покупкой",
    "Не сообщайте коды из SMS и данные карты",
];

const TIPS_KK: [&str; 4] = [
    "Тауарды көрмейінше алдын ала төлем жасамаңыз",
    "Сатушымен адам көп жерде кездесіңіз",
    "Сатып алмас бұрын тауар мен құжаттарды тексеріңіз",
    "SMS кодтары мен карта деректерін ешкімге айтпаңыз",
];

/// Safety tips in `language`.
pub fn safety_tips(language: Language) -> &'static [&'static str] {
    match language {
        Language::Ru => &TIPS_RU,
        Language::Kk => &TIPS_KK,
    }
}

/// Render the safety tips list.
pub fn render_safety_tips(language: Language) -> String {
    let items: String = safety_tips(language)
        .iter()
        .map(|tip| format!("<li>{}</li>", tip))
        .collect();

    format!(
        r#"<section class="safety-tips" data-section="safety-tips">
    <h2>{heading}</h2>
    <ul>{items}</ul>
</section>"#,
        heading = language.pick("Советы по безопасности", "Қауіпсіздік кеңестері"),
        items = items
    )
}
