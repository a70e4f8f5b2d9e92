use dioxus::prelude::*;
pub use shared_ui::locale::{Lang, LocaleState};

/// English/Arabic string table. Rows are `(key, en, ar)`.
///
/// Keys are grouped by surface; shared field labels live under `field.*`
/// so entity schemas can reuse them instead of repeating translations.
static STRINGS: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.dashboard", "Dashboard", "لوحة التحكم"),
    ("nav.students", "Students", "الطلاب"),
    ("nav.teachers", "Teachers", "المعلمون"),
    ("nav.classes", "Classes", "الفصول"),
    ("nav.guardians", "Guardians", "أولياء الأمور"),
    ("nav.employees", "Employees", "الموظفون"),
    ("nav.expenses", "Expenses", "المصروفات"),
    ("nav.payments", "Payments", "المدفوعات"),
    ("nav.announcements", "Announcements", "الإعلانات"),
    ("group.overview", "Overview", "نظرة عامة"),
    ("group.academics", "Academics", "الشؤون الأكاديمية"),
    ("group.people", "People", "الأشخاص"),
    ("group.finance", "Finance", "المالية"),
    ("group.communication", "Communication", "التواصل"),
    // Common actions
    ("common.search", "Search", "بحث"),
    ("common.clear", "Clear", "مسح"),
    ("common.add", "Add", "إضافة"),
    ("common.edit", "Edit", "تعديل"),
    ("common.delete", "Delete", "حذف"),
    ("common.delete_selected", "Delete selected", "حذف المحدد"),
    ("common.cancel", "Cancel", "إلغاء"),
    ("common.save", "Save", "حفظ"),
    ("common.saving", "Saving...", "جارٍ الحفظ..."),
    ("common.deleting", "Deleting...", "جارٍ الحذف..."),
    ("common.loading", "Loading...", "جارٍ التحميل..."),
    ("common.empty", "Nothing here yet.", "لا توجد بيانات بعد."),
    ("common.all", "All", "الكل"),
    ("common.logout", "Sign out", "تسجيل الخروج"),
    ("common.back_home", "Back to homepage", "العودة إلى الصفحة الرئيسية"),
    ("common.not_found", "Page not found", "الصفحة غير موجودة"),
    (
        "confirm.delete_title",
        "Confirm deletion",
        "تأكيد الحذف",
    ),
    (
        "confirm.delete_body",
        "This action cannot be undone.",
        "لا يمكن التراجع عن هذا الإجراء.",
    ),
    // Toasts & forms
    ("toast.saved", "Saved successfully", "تم الحفظ بنجاح"),
    ("toast.deleted", "Deleted successfully", "تم الحذف بنجاح"),
    ("form.required", "This field is required.", "هذا الحقل مطلوب."),
    (
        "form.pick_option",
        "-- Select --",
        "-- اختر --",
    ),
    (
        "picker.search",
        "Search options...",
        "ابحث في الخيارات...",
    ),
    ("picker.empty", "No options available", "لا توجد خيارات متاحة"),
    // Shared field labels
    ("field.name", "Name", "الاسم"),
    ("field.email", "Email", "البريد الإلكتروني"),
    ("field.phone", "Phone", "الهاتف"),
    ("field.password", "Password", "كلمة المرور"),
    ("field.status", "Status", "الحالة"),
    ("field.amount", "Amount", "المبلغ"),
    ("field.date", "Date", "التاريخ"),
    ("field.title", "Title", "العنوان"),
    ("field.notes", "Notes", "ملاحظات"),
    ("field.classe", "Class", "الفصل"),
    ("field.classes", "Classes", "الفصول"),
    ("field.guardian", "Guardian", "ولي الأمر"),
    ("field.level", "Level", "المستوى"),
    ("field.salary", "Salary", "الراتب"),
    ("field.role", "Role", "الدور"),
    ("field.gender", "Gender", "الجنس"),
    ("field.birth_date", "Birth date", "تاريخ الميلاد"),
    ("field.photo", "Photo", "الصورة"),
    ("field.active", "Active", "نشط"),
    ("field.paid_at", "Paid at", "تاريخ الدفع"),
    ("field.method", "Method", "طريقة الدفع"),
    ("field.category", "Category", "الفئة"),
    ("field.body", "Body", "المحتوى"),
    ("field.audience", "Audience", "الجمهور"),
    ("field.student", "Student", "الطالب"),
    ("field.capacity", "Capacity", "السعة"),
    ("field.subject", "Subject", "المادة"),
    ("field.hire_date", "Hire date", "تاريخ التعيين"),
    ("field.address", "Address", "العنوان"),
    // Entity titles
    ("students.title", "Students", "الطلاب"),
    ("teachers.title", "Teachers", "المعلمون"),
    ("classes.title", "Classes", "الفصول"),
    ("guardians.title", "Guardians", "أولياء الأمور"),
    ("employees.title", "Employees", "الموظفون"),
    ("expenses.title", "Expenses", "المصروفات"),
    ("payments.title", "Payments", "المدفوعات"),
    ("announcements.title", "Announcements", "الإعلانات"),
    // Placeholders
    (
        "students.search_placeholder",
        "Search by student name...",
        "ابحث باسم الطالب...",
    ),
    (
        "search.placeholder",
        "Type to search...",
        "اكتب للبحث...",
    ),
    // Login page
    ("login.title", "Sign in", "تسجيل الدخول"),
    (
        "login.subtitle",
        "Use your school account to continue.",
        "استخدم حساب المدرسة للمتابعة.",
    ),
    ("login.submit", "Sign in", "تسجيل الدخول"),
    ("login.signing_in", "Signing in...", "جارٍ تسجيل الدخول..."),
    // Dashboard
    ("dashboard.welcome", "Welcome", "مرحباً"),
    (
        "dashboard.overview",
        "Here is what is happening in your school today.",
        "إليك ما يجري في مدرستك اليوم.",
    ),
    ("stat.students", "Students", "الطلاب"),
    ("stat.teachers", "Teachers", "المعلمون"),
    ("stat.classes", "Classes", "الفصول"),
    ("stat.guardians", "Guardians", "أولياء الأمور"),
    ("stat.employees", "Employees", "الموظفون"),
    ("stat.expenses_month", "Expenses this month", "مصروفات هذا الشهر"),
    ("stat.payments_month", "Payments this month", "مدفوعات هذا الشهر"),
    ("stat.children", "My children", "أبنائي"),
    ("stat.my_classes", "My classes", "فصولي"),
    ("stat.pending_admissions", "Pending admissions", "طلبات القبول المعلقة"),
    // Marketing homepage
    (
        "home.hero_title",
        "One platform for your whole school",
        "منصة واحدة لمدرستك بأكملها",
    ),
    (
        "home.hero_subtitle",
        "Admissions, classes, staff, and finance in one bilingual workspace built for Arabic and English.",
        "القبول والفصول والموظفون والمالية في مساحة عمل واحدة ثنائية اللغة بالعربية والإنجليزية.",
    ),
    ("home.cta_login", "Go to your dashboard", "انتقل إلى لوحة التحكم"),
    ("home.features_title", "Everything your team needs", "كل ما يحتاجه فريقك"),
    (
        "home.feature_bilingual_title",
        "Arabic first, English ready",
        "العربية أولاً والإنجليزية جاهزة",
    ),
    (
        "home.feature_bilingual_body",
        "Right-to-left layouts and full translations out of the box.",
        "واجهات من اليمين إلى اليسار وترجمات كاملة دون أي إعداد.",
    ),
    (
        "home.feature_roles_title",
        "A dashboard for every role",
        "لوحة تحكم لكل دور",
    ),
    (
        "home.feature_roles_body",
        "Directors, teachers, HR, accountants, reception, and parents each see exactly what they need.",
        "يرى المدراء والمعلمون والموارد البشرية والمحاسبون وموظفو الاستقبال وأولياء الأمور ما يحتاجونه بالضبط.",
    ),
    (
        "home.feature_finance_title",
        "Fees and expenses, reconciled",
        "رسوم ومصروفات مُسوّاة",
    ),
    (
        "home.feature_finance_body",
        "Track tuition payments and running costs without spreadsheets.",
        "تابع مدفوعات الرسوم والتكاليف الجارية دون جداول بيانات.",
    ),
    ("home.contact_title", "Talk to us", "تواصل معنا"),
    (
        "home.contact_body",
        "We onboard new schools every week. Write to hello@madaris.app and we will set you up.",
        "ننضم مدارس جديدة كل أسبوع. راسلنا على hello@madaris.app وسنجهز كل شيء لك.",
    ),
];

/// Resolve `key` in the given language.
///
/// Unknown keys return the key itself, so a missing translation shows up in
/// the UI as its key instead of crashing or blanking the label.
pub fn tr(lang: Lang, key: &str) -> String {
    for (k, en, ar) in STRINGS {
        if *k == key {
            return match lang {
                Lang::En => en,
                Lang::Ar => ar,
            }
            .to_string();
        }
    }
    key.to_string()
}

/// Current language from the locale context.
pub fn use_lang() -> Lang {
    let locale = use_context::<LocaleState>();
    let lang = *locale.lang.read();
    lang
}

/// Restore the persisted language into the locale signal after mount.
///
/// The `LocaleSeed` script already fixed the document direction before
/// paint; this closes the loop for the Rust-side string table. A missing
/// or malformed cookie leaves the default in place.
pub fn use_persisted_lang() {
    let locale = use_context::<LocaleState>();
    use_future(move || {
        let mut lang_signal = locale.lang;
        async move {
            let mut eval = document::eval("dioxus.send(document.cookie);");
            if let Ok(cookie) = eval.recv::<String>().await {
                if let Some(value) = cookie
                    .split(';')
                    .filter_map(|piece| piece.trim().strip_prefix("lang="))
                    .next()
                {
                    lang_signal.set(Lang::from_key(value));
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_key_has_both_translations() {
        for (key, en, ar) in STRINGS {
            assert!(!en.is_empty(), "missing English for {key}");
            assert!(!ar.is_empty(), "missing Arabic for {key}");
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _, _) in STRINGS {
            assert!(seen.insert(*key), "duplicate key {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(tr(Lang::En, "no.such.key"), "no.such.key");
        assert_eq!(tr(Lang::Ar, "no.such.key"), "no.such.key");
    }

    #[test]
    fn lookup_respects_language() {
        assert_eq!(tr(Lang::En, "nav.students"), "Students");
        assert_eq!(tr(Lang::Ar, "nav.students"), "الطلاب");
    }
}
