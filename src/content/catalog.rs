//! The content tables of the showcase.

use super::{
    Category, ContactInfo, ContactKind, Icon, PortfolioItem, ServiceOffering, Slide, Stat,
    Testimonial, Text,
};

/// Brand name shown in the navbar and footer.
pub const BRAND: Text = Text::new("PhotoCraft", "ФотоАрт");

/// Portrait of the photographer in the about section.
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1581092795360-fd1ca04f0952?auto=format&fit=crop&w=800&q=80";

pub static SLIDES: [Slide; 3] = [
    Slide {
        id: 1,
        image: "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?auto=format&fit=crop&w=1920&q=80",
        title: Text::new(
            "Capture Life's Beautiful Moments",
            "Запечатлейте прекрасные моменты жизни",
        ),
        subtitle: Text::new(
            "Professional photography that tells your story",
            "Профессиональная фотография, которая расскажет вашу историю",
        ),
    },
    Slide {
        id: 2,
        image: "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?auto=format&fit=crop&w=1920&q=80",
        title: Text::new("Every Frame Tells a Story", "Каждый кадр рассказывает историю"),
        subtitle: Text::new(
            "Creating timeless memories through the lens",
            "Создание вечных воспоминаний через объектив",
        ),
    },
    Slide {
        id: 3,
        image: "https://images.unsplash.com/photo-1472396961693-142e6e269027?auto=format&fit=crop&w=1920&q=80",
        title: Text::new("Art Through the Lens", "Искусство через объектив"),
        subtitle: Text::new(
            "Where vision meets passion in every shot",
            "Где видение встречается со страстью в каждом кадре",
        ),
    },
];

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        category: Category::Portraits,
        image: "https://images.unsplash.com/photo-1581092795360-fd1ca04f0952?auto=format&fit=crop&w=600&h=600&q=80",
        title: Text::new("Urban Portrait", "Городской портрет"),
        description: Text::new(
            "A modern photo session in the city",
            "Современная фотосессия в городе",
        ),
    },
    PortfolioItem {
        id: 2,
        category: Category::Landscapes,
        image: "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?auto=format&fit=crop&w=600&h=600&q=80",
        title: Text::new("Morning Mist", "Утренний туман"),
        description: Text::new("Mountain landscape at dawn", "Горный пейзаж на рассвете"),
    },
    PortfolioItem {
        id: 3,
        category: Category::Weddings,
        image: "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?auto=format&fit=crop&w=600&h=600&q=80",
        title: Text::new("Eternal Love", "Вечная любовь"),
        description: Text::new("A spring wedding ceremony", "Весенняя свадебная церемония"),
    },
    PortfolioItem {
        id: 4,
        category: Category::Commercial,
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=600&h=600&q=80",
        title: Text::new("Creative Workspace", "Креативное рабочее пространство"),
        description: Text::new(
            "The modern office of a technology company",
            "Современный офис технологической компании",
        ),
    },
    PortfolioItem {
        id: 5,
        category: Category::Portraits,
        image: "https://images.unsplash.com/photo-1581092795360-fd1ca04f0952?auto=format&fit=crop&w=600&h=600&q=80",
        title: Text::new("City Lights", "Городские огни"),
        description: Text::new("A night-time city portrait", "Ночной городской портрет"),
    },
    PortfolioItem {
        id: 6,
        category: Category::Landscapes,
        image: "https://images.unsplash.com/photo-1472396961693-142e6e269027?auto=format&fit=crop&w=600&h=600&q=80",
        title: Text::new("Nature's Wonder", "Природное чудо"),
        description: Text::new(
            "Wildlife in its natural habitat",
            "Дикая природа в естественной среде",
        ),
    },
];

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: Text::new("Alexandra Green", "Александра Грин"),
        role: Text::new("Wedding Client", "Свадебная съёмка"),
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=150&h=150&q=80",
        quote: Text::new(
            "Working with this photographer was the best decision we made for our wedding. The photos captured every emotion and special moment perfectly. Truly a master of light and composition!",
            "Работа с этим фотографом стала лучшим решением для нашей свадьбы. Снимки идеально передали каждую эмоцию и каждый особенный момент. Настоящий мастер света и композиции!",
        ),
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: Text::new("Michael Roberts", "Майкл Робертс"),
        role: Text::new("Corporate Client", "Корпоративный клиент"),
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=150&h=150&q=80",
        quote: Text::new(
            "The corporate portraits exceeded our expectations. Every team member looked professional yet approachable. The turnaround time was impressively fast without compromising quality.",
            "Корпоративные портреты превзошли наши ожидания. Каждый сотрудник выглядит профессионально и при этом открыто. Сроки впечатляюще короткие, а качество не пострадало.",
        ),
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: Text::new("Sophia Chen", "София Чен"),
        role: Text::new("Portrait Session", "Портретная съёмка"),
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=150&h=150&q=80",
        quote: Text::new(
            "I was nervous about my portrait session, but the photographer made me feel so comfortable. The results were stunning - I've never had photos that captured my personality so well.",
            "Я волновалась перед портретной съёмкой, но фотограф помог мне полностью расслабиться. Результат потрясающий: ещё ни одни фотографии так точно не передавали мой характер.",
        ),
        rating: 5,
    },
    Testimonial {
        id: 4,
        name: Text::new("David Wilson", "Дэвид Уилсон"),
        role: Text::new("Real Estate Agent", "Агент по недвижимости"),
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=150&h=150&q=80",
        quote: Text::new(
            "The property photos were exceptional. Each space was captured in the perfect light, making our listings stand out from the competition. Will definitely use these services again!",
            "Фотографии объектов получились исключительными. Каждое помещение снято в идеальном свете, и наши объявления выделяются среди конкурентов. Обязательно обратимся снова!",
        ),
        rating: 5,
    },
];

pub static SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        icon: Icon::User,
        title: Text::new("Portrait Photography", "Портретная съёмка"),
        description: Text::new(
            "Capture your personality and emotions in carefully composed professional portraits.",
            "Ваш характер и эмоции в тщательно выстроенных профессиональных портретах.",
        ),
        features: &[
            Text::new("Indoor/Outdoor Sessions", "Съёмка в студии и на улице"),
            Text::new("Professional Retouching", "Профессиональная ретушь"),
            Text::new("Multiple Outfit Changes", "Несколько образов"),
            Text::new("Digital & Print Delivery", "Цифровые и печатные снимки"),
        ],
    },
    ServiceOffering {
        icon: Icon::Mountain,
        title: Text::new("Landscape Photography", "Пейзажная съёмка"),
        description: Text::new(
            "Stunning landscape imagery that showcases the beauty of nature in its finest details.",
            "Захватывающие пейзажи, раскрывающие красоту природы в мельчайших деталях.",
        ),
        features: &[
            Text::new("Golden Hour Shots", "Съёмка в золотой час"),
            Text::new("Panoramic Views", "Панорамные виды"),
            Text::new("Weather Planning", "Планирование по погоде"),
            Text::new("Fine Art Prints Available", "Художественная печать"),
        ],
    },
    ServiceOffering {
        icon: Icon::Heart,
        title: Text::new("Wedding Photography", "Свадебная съёмка"),
        description: Text::new(
            "Preserve your special day with a perfect blend of candid moments and artistic compositions.",
            "Сохраните ваш особенный день в идеальном сочетании живых моментов и художественных композиций.",
        ),
        features: &[
            Text::new("Full Day Coverage", "Съёмка на весь день"),
            Text::new("Second Photographer", "Второй фотограф"),
            Text::new("Engagement Session", "Предсвадебная фотосессия"),
            Text::new("Custom Wedding Album", "Авторский свадебный альбом"),
        ],
    },
    ServiceOffering {
        icon: Icon::Building,
        title: Text::new("Commercial Photography", "Коммерческая съёмка"),
        description: Text::new(
            "Professional imagery for businesses that helps showcase products and services effectively.",
            "Профессиональные снимки для бизнеса, которые эффектно представят ваши товары и услуги.",
        ),
        features: &[
            Text::new("Product Photography", "Предметная съёмка"),
            Text::new("Corporate Headshots", "Деловые портреты"),
            Text::new("Real Estate", "Недвижимость"),
            Text::new("Social Media Content", "Контент для соцсетей"),
        ],
    },
];

pub static STATS: [Stat; 4] = [
    Stat {
        icon: Icon::Camera,
        value: "10+",
        label: Text::new("Years of Experience", "Лет опыта"),
    },
    Stat {
        icon: Icon::Award,
        value: "150+",
        label: Text::new("Projects Completed", "Завершённых проектов"),
    },
    Stat {
        icon: Icon::Users,
        value: "80+",
        label: Text::new("Satisfied Clients", "Довольных клиентов"),
    },
    Stat {
        icon: Icon::Heart,
        value: "15+",
        label: Text::new("Awards Won", "Наград"),
    },
];

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        kind: ContactKind::Email,
        title: Text::new("Email", "Эл. почта"),
        value: "contact@photocraft.com",
        link: "mailto:contact@photocraft.com",
    },
    ContactInfo {
        kind: ContactKind::Phone,
        title: Text::new("Phone", "Телефон"),
        value: "+1 (555) 123-4567",
        link: "tel:+15551234567",
    },
    ContactInfo {
        kind: ContactKind::Location,
        title: Text::new("Studio Location", "Адрес студии"),
        value: "123 Photo Lane, Capture City",
        link: "https://maps.google.com",
    },
];

/// Subjects offered by the contact form's subject picker.
pub static CONTACT_SUBJECTS: [Text; 4] = [
    Text::new("Portrait Session", "Портретная съёмка"),
    Text::new("Wedding Photography", "Свадебная съёмка"),
    Text::new("Commercial Work", "Коммерческий заказ"),
    Text::new("Other Inquiry", "Другой вопрос"),
];

/// Paragraphs of the about section.
pub static ABOUT_PARAGRAPHS: [Text; 2] = [
    Text::new(
        "I'm a passionate photographer with over 10 years of professional experience. My approach combines technical excellence with an artistic vision to create images that capture the essence of each moment.",
        "Я увлечённый фотограф с более чем 10-летним профессиональным опытом. Мой подход сочетает техническое совершенство с художественным видением, чтобы создавать снимки, передающие суть каждого момента.",
    ),
    Text::new(
        "Whether I'm shooting landscapes, portraits, or events, I strive to tell a compelling visual story that resonates with viewers. My work has been featured in various publications and has earned recognition in international photography competitions.",
        "Снимаю ли я пейзажи, портреты или события, я стремлюсь рассказать убедительную визуальную историю, которая найдёт отклик у зрителя. Мои работы публиковались в различных изданиях и получили признание на международных фотоконкурсах.",
    ),
];

/// Every remote image referenced by the content, hero slides first.
///
/// Duplicates are removed while keeping first-seen order, so the prefetcher
/// fetches the hero images before anything else.
pub fn image_urls() -> Vec<&'static str> {
    let ordered = SLIDES
        .iter()
        .map(|s| s.image)
        .chain(PORTFOLIO.iter().map(|p| p.image))
        .chain(std::iter::once(ABOUT_IMAGE))
        .chain(TESTIMONIALS.iter().map(|t| t.image));

    let mut urls: Vec<&'static str> = Vec::new();
    for url in ordered {
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}
