//! Static page copy

pub struct Offer {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TRUSTED_BY: [&str; 6] = [
    "المدرسة الدولية",
    "المدرسة البريطانية",
    "STEM مصر",
    "الجامعة الأمريكية",
    "جامعة النيل",
    "GUC",
];

pub const OFFERS: [Offer; 6] = [
    Offer {
        title: "معلمون موثوقون",
        description: "ملفات مُراجعة للتحقق من الشهادات وجودة التدريس.",
    },
    Offer {
        title: "جلسات 1:1 مرنة",
        description: "دروس أونلاين أو حضور حسب تفضيلك ومواعيدك.",
    },
    Offer {
        title: "متوافقة مع المناهج",
        description: "IB، IGCSE، SAT، مناهج وطنية، وأكثر.",
    },
    Offer {
        title: "متابعة التقدّم",
        description: "ملاحظات الدروس وأهداف واضحة ومسارات تطور.",
    },
    Offer {
        title: "أمان وخصوصية",
        description: "مدفوعات آمنة وسياسات خصوصية واضحة.",
    },
    Offer {
        title: "رضاكم مضمون",
        description: "تبديل المعلم مجانًا إن لم تكن الرؤية مناسبة.",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "اختر المادة",
        description: "حدّد ما تريد تعلّمه وهدفك.",
    },
    Step {
        number: 2,
        title: "قارن المعلمين",
        description: "بناءً على التقييم، السعر، واللغة.",
    },
    Step {
        number: 3,
        title: "احجز درسًا تجريبيًا",
        description: "التقي بالمعلم وحدِّد خطة التعلم.",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "هل يتم التحقق من المعلمين؟",
        answer: "نعم — نراجع الشهادات، عينات الدروس، وتقييمات الطلبة قبل الموافقة.",
    },
    Faq {
        question: "هل يمكنني تبديل المعلم؟",
        answer: "نعم — إذا لم يكن الدرس مناسباً بعد الدرس التجريبي سنساعدك في التبديل مجانًا.",
    },
    Faq {
        question: "كيف يتم الدفع؟",
        answer: "الدفع لكل درس أو عبر باقات مخفضة بواسطة بوابات دفع آمنة.",
    },
];

pub const EMPTY_STATE: &str = "لا يوجد معلمون مطابقون. جرِّب مادة أخرى أو نوع جلسة مختلف.";

/// Prefilled chat message for a tutor's trial lesson
pub fn trial_request(tutor_name: &str) -> String {
    format!("مرحباً، أود حجز درس تجريبي مع {tutor_name}")
}
