//! The bundled Earth encyclopedia.

use super::CorpusFile;
use crate::sections::{Button, FactSection, SubFact};

pub(super) fn corpus_file() -> CorpusFile {
    CorpusFile {
        sections: vec![
            biosphere(),
            hydrosphere(),
            history(),
            atmosphere(),
            geology(),
            climate(),
        ],
        sub_facts: sub_facts(),
    }
}

fn biosphere() -> FactSection {
    FactSection::new("biosphere", "Биосфера", "🌿", "#4ade80")
        .with_intro("Биосфера — оболочка Земли, где существует жизнь. Охватывает нижние слои атмосферы, всю гидросферу и верхние слои литосферы.")
        .with_fact("На Земле описано более **8,7 миллиона** видов живых организмов")
        .with_fact("Общая биомасса составляет **≈550 Гт углерода**")
        .with_fact("Глубочайшая жизнь обнаружена на **12 км** под поверхностью океана")
        .with_fact("Растения производят около **120 млрд тонн** органики в год")
        .with_fact("Биосфера существует уже более **3,8 миллиарда лет**")
        .with_button_row(vec![
            Button::new("Растительный мир", "bio_plants").with_emoji("🌱"),
            Button::new("Животный мир", "bio_animals").with_emoji("🦁"),
        ])
        .with_button_row(vec![
            Button::new("Микроорганизмы", "bio_micro").with_emoji("🦠"),
            Button::new("Угрозы биосфере", "bio_threats").with_emoji("⚠️"),
        ])
}

fn hydrosphere() -> FactSection {
    FactSection::new("hydrosphere", "Гидросфера", "🌊", "#38bdf8")
        .with_intro("Гидросфера — водная оболочка Земли, включающая Мировой океан, ледники, реки, озёра и подземные воды.")
        .with_fact("**97,5%** всей воды на Земле — солёная, лишь 2,5% — пресная")
        .with_fact("Мировой океан занимает **70,8%** поверхности планеты")
        .with_fact("Средняя глубина океана составляет **3 800 м**")
        .with_fact("Максимальная глубина — **11 034 м** (Марианская впадина)")
        .with_fact("В океанах растворено около **50 квинтильонов тонн** солей")
        .with_button_row(vec![
            Button::new("Мировой океан", "hydro_ocean").with_emoji("🌊"),
            Button::new("Ледники", "hydro_glaciers").with_emoji("🧊"),
        ])
        .with_button_row(vec![
            Button::new("Реки и озёра", "hydro_rivers").with_emoji("🏞️"),
            Button::new("Круговорот воды", "hydro_cycle").with_emoji("♻️"),
        ])
}

fn history() -> FactSection {
    FactSection::new("history", "История Земли", "⏳", "#fb923c")
        .with_menu_label("История")
        .with_intro("История Земли насчитывает около 4,54 миллиарда лет и делится на геологические эоны, эры и периоды.")
        .with_fact("Возраст Земли — **4,54 ± 0,05 миллиарда лет**")
        .with_fact("Луна образовалась ~**4,5 млрд лет** назад в результате столкновения с Тейей")
        .with_fact("Первые одноклеточные появились **3,8–3,5 млрд** лет назад")
        .with_fact("Кислородная революция произошла **2,4 млрд** лет назад")
        .with_fact("Эпоха динозавров длилась **186 миллионов лет** (мезозой)")
        .with_button_row(vec![
            Button::new("Архей и Протерозой", "hist_early").with_emoji("🔬"),
            Button::new("Эра динозавров", "hist_dino").with_emoji("🦕"),
        ])
        .with_button_row(vec![
            Button::new("Ледниковые периоды", "hist_ice").with_emoji("❄️"),
            Button::new("Появление человека", "hist_human").with_emoji("👤"),
        ])
}

fn atmosphere() -> FactSection {
    FactSection::new("atmosphere", "Атмосфера", "🌬️", "#a78bfa")
        .with_intro("Атмосфера — газовая оболочка Земли, удерживаемая гравитацией. Простирается до ~10 000 км.")
        .with_fact("Атмосфера состоит на **78,09% из азота** и **20,95% из кислорода**")
        .with_fact("Общая масса атмосферы — **5,15 × 10¹⁸ кг**")
        .with_fact("Озоновый слой расположен на высоте **15–35 км**")
        .with_fact("Температура в мезосфере опускается до **−90°C**")
        .with_fact("В термосфере температура достигает **+2000°C** и выше")
        .with_button_row(vec![
            Button::new("Слои атмосферы", "atm_layers").with_emoji("📊"),
            Button::new("Озоновый слой", "atm_ozone").with_emoji("🔵"),
        ])
        .with_button_row(vec![
            Button::new("Парниковый эффект", "atm_greenhouse").with_emoji("🌡️"),
            Button::new("Погода и ветер", "atm_weather").with_emoji("🌪️"),
        ])
}

fn geology() -> FactSection {
    FactSection::new("geology", "Геология", "⛰️", "#f59e0b")
        .with_intro("Геология изучает твёрдую оболочку Земли — литосферу, её состав, строение и историю формирования.")
        .with_fact("Земля состоит из **коры, мантии, внешнего и внутреннего ядра**")
        .with_fact("Температура в центре Земли достигает **~6 000°C**")
        .with_fact("Самый высокий вулкан от дна: Мауна-Кеа — **10 203 м**")
        .with_fact("Тектонические плиты движутся со скоростью **2–10 см** в год")
        .with_fact("Самый старый минерал — циркон возрастом **4,4 млрд лет**")
        .with_button_row(vec![
            Button::new("Строение Земли", "geo_structure").with_emoji("🔴"),
            Button::new("Тектоника плит", "geo_plates").with_emoji("🗺️"),
        ])
        .with_button_row(vec![
            Button::new("Вулканизм", "geo_volcanoes").with_emoji("🌋"),
            Button::new("Землетрясения", "geo_quakes").with_emoji("📳"),
        ])
}

fn climate() -> FactSection {
    FactSection::new("climate", "Климат", "🌡️", "#f43f5e")
        .with_intro("Климат — многолетний режим погоды, характерный для данной местности. Определяется множеством факторов.")
        .with_fact("Средняя температура поверхности Земли — **+15°C**")
        .with_fact("Самая высокая температура: **+56,7°C** (Долина Смерти, 1913)")
        .with_fact("Самая низкая температура: **−89,2°C** (Антарктида, 1983)")
        .with_fact("С 1880 г. средняя температура выросла на **≈1,1°C**")
        .with_fact("CO₂ достиг **420 ppm** — максимум за 3 миллиона лет")
        .with_button_row(vec![
            Button::new("Климатические зоны", "cli_zones").with_emoji("🗺️"),
            Button::new("Изменение климата", "cli_change").with_emoji("📈"),
        ])
        .with_button_row(vec![
            Button::new("Течения и климат", "cli_currents").with_emoji("🌊"),
            Button::new("Климат в цифрах", "cli_stats").with_emoji("📊"),
        ])
}

fn sub_facts() -> Vec<SubFact> {
    vec![
        SubFact::new(
            "bio_plants",
            "🌱 Растительный мир",
            "На Земле насчитывается около **390 000 видов растений**. Леса занимают ~31% суши и поглощают **2,6 млрд тонн CO₂** ежегодно. Самое старое дерево — сосна Мафусаил в США: **4 855 лет**.",
        ),
        SubFact::new(
            "bio_animals",
            "🦁 Животный мир",
            "Описано более **1 млн видов животных**, из них ~950 тыс. — насекомые. Самое крупное животное — синий кит (до **33 м** и **190 тонн**). Самое быстрое — сокол-сапсан (**389 км/ч** в пике).",
        ),
        SubFact::new(
            "bio_micro",
            "🦠 Микроорганизмы",
            "На Земле существует около **10³⁰ бактерий** — их суммарная масса превышает массу всех растений и животных вместе взятых. В одном грамме почвы — до **1 миллиарда** бактерий.",
        ),
        SubFact::new(
            "bio_threats",
            "⚠️ Угрозы биосфере",
            "Текущие темпы вымирания видов в **1 000 раз** превышают естественный фон. Человечество уничтожило **83% дикой фауны** с момента цивилизации. Площадь лесов сократилась на **46%** за всю историю.",
        ),
        SubFact::new(
            "hydro_ocean",
            "🌊 Мировой океан",
            "Тихий океан занимает **165,2 млн км²** — больше, чем все континенты вместе. Атлантический расширяется на **1,5 см** в год. Изучено лишь **5–20%** дна Мирового океана.",
        ),
        SubFact::new(
            "hydro_glaciers",
            "🧊 Ледники",
            "Ледники хранят **69%** всей пресной воды Земли. Антарктический щит содержит лёд толщиной до **4 776 м**. При полном таянии уровень океана поднимется на **65–70 м**.",
        ),
        SubFact::new(
            "hydro_rivers",
            "🏞️ Реки и озёра",
            "Самая длинная река — **Нил (6 853 км)**. Самая полноводная — **Амазонка**: несёт 20% всей речной воды Земли. Байкал — глубочайшее озеро мира (**1 642 м**) и **20%** мировых запасов пресной воды.",
        ),
        SubFact::new(
            "hydro_cycle",
            "♻️ Круговорот воды",
            "Ежегодно испаряется около **577 000 км³** воды. Среднее время пребывания воды в атмосфере — **8–10 дней**. Подземные воды составляют **30%** всей пресной воды и формируются тысячелетиями.",
        ),
        SubFact::new(
            "hist_early",
            "🔬 Архей и Протерозой",
            "Архейский эон (4–2,5 млрд лет назад) — эпоха первых прокариот и кратонов. Протерозой (2,5–541 млн лет) — появление эукариот, первых многоклеточных и кислородной атмосферы.",
        ),
        SubFact::new(
            "hist_dino",
            "🦕 Эра динозавров",
            "Мезозойская эра (252–66 млн лет назад): триас, юра и мел. Крупнейший динозавр — **Аргентинозавр** (до 40 м, ~100 тонн). Вымирание произошло из-за астероида диаметром **~10 км**.",
        ),
        SubFact::new(
            "hist_ice",
            "❄️ Ледниковые периоды",
            "За последние 2,6 млн лет Земля пережила около **50 ледниковых циклов**. Последний максимум — **21 000 лет назад**. Тогда ледники покрывали **30%** суши.",
        ),
        SubFact::new(
            "hist_human",
            "👤 Появление человека",
            "Homo sapiens появился в Африке около **300 000 лет назад**. Массовое расселение началось ~**70 000 лет** назад. Первые города появились **~5 500 лет** назад.",
        ),
        SubFact::new(
            "atm_layers",
            "📊 Слои атмосферы",
            "Тропосфера (0–12 км) — погода и **80% массы**. Стратосфера (12–50 км) — озоновый слой. Мезосфера (50–85 км) — сгорают метеориты. Термосфера (85–700 км) — полярное сияние. Экзосфера — переход в космос.",
        ),
        SubFact::new(
            "atm_ozone",
            "🔵 Озоновый слой",
            "Озоновый слой поглощает **97–99%** ультрафиолета Солнца. «Озоновая дыра» достигла максимума в **2000 году** (29,9 млн км²). Благодаря Монреальскому протоколу 1987 г. слой постепенно восстанавливается.",
        ),
        SubFact::new(
            "atm_greenhouse",
            "🌡️ Парниковый эффект",
            "Без парникового эффекта средняя температура Земли была бы **−18°C**. Основные газы: водяной пар (50%), CO₂ (20%), озон (7%), метан. Антропогенный эффект усиливает естественный.",
        ),
        SubFact::new(
            "atm_weather",
            "🌪️ Погода и ветер",
            "Самый сильный ветер зафиксирован на г. Вашингтон: **372 км/ч** (1934). Ураган 5-й категории — свыше **250 км/ч**. Молния нагревает воздух до **30 000°C** — в 5 раз горячее поверхности Солнца.",
        ),
        SubFact::new(
            "geo_structure",
            "🔴 Строение Земли",
            "Кора: **5–70 км**. Мантия: **2 900 км**, 500–4 000°C. Внешнее ядро: жидкое железо, **2 200 км**. Внутреннее ядро: твёрдое, радиус **1 220 км**, температура ~**6 000°C**.",
        ),
        SubFact::new(
            "geo_plates",
            "🗺️ Тектоника плит",
            "Литосфера разделена на **7 крупных и ~20 малых** плит. Гималаи растут на **~5 мм** в год — столкновение Индийской и Евразийской плит. Атлантический океан расширяется на **2,5 см** ежегодно.",
        ),
        SubFact::new(
            "geo_volcanoes",
            "🌋 Вулканизм",
            "На Земле около **1 500 потенциально активных** вулканов. Сильнейшее историческое извержение — Тамбора (1815): **160 км³** материала. Ежегодно происходит **50–60 извержений**. 80% — подводные.",
        ),
        SubFact::new(
            "geo_quakes",
            "📳 Землетрясения",
            "Ежегодно регистрируется **~500 000 землетрясений**, ~100 000 ощутимы людьми. Сильнейшее — Чилийское 1960 г. (магнитуда **9,5**). Наибольшая активность — Тихоокеанское огненное кольцо.",
        ),
        SubFact::new(
            "cli_zones",
            "🗺️ Климатические зоны",
            "По классификации Кёппена выделяют **5 основных групп**: тропический, сухой, умеренный, континентальный, полярный. Умеренный климат занимает **~25% суши** — самая большая зона.",
        ),
        SubFact::new(
            "cli_change",
            "📈 Изменение климата",
            "С 1880 г. температура выросла на **1,1°C**. 2023 год стал **самым жарким** за всю историю измерений. МГЭИК прогнозирует рост на **1,5–4,5°C** к 2100 г. при нынешних темпах выбросов.",
        ),
        SubFact::new(
            "cli_currents",
            "🌊 Течения и климат",
            "Гольфстрим переносит **30 млн м³/с** — в 20 раз больше всех рек мира. Без него Европа была бы холоднее на **5–10°C**. Эль-Ниньо меняет климат на **⅓ планеты** каждые 2–7 лет.",
        ),
        SubFact::new(
            "cli_stats",
            "📊 Климат в цифрах",
            "Максимум: **+56,7°C** (Долина Смерти, 1913). Минимум: **−89,2°C** (ст. Восток, 1983). Среднегодовые осадки на Земле: **~1 000 мм**. Самое влажное место: Мауасинрам, Индия — **11 870 мм/год**.",
        ),
    ]
}
