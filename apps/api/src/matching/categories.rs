//! Curated catalog-category lists per personality group.
//!
//! Each group has a base set and a synthesizer-only extension, plus a
//! small alias table bridging semantic families that never match by
//! substring (the catalog mixes Vietnamese and English labels).

use crate::quiz::models::PersonalityGroup;

pub fn base_categories(group: PersonalityGroup) -> &'static [&'static str] {
    match group {
        PersonalityGroup::Connector => &[
            "Sách tư duy - Kỹ năng sống",
            "Tâm lý - Giáo dục giới tính",
            "Gia đình",
            "Nuôi dạy con",
            "Tình yêu - Hôn nhân",
            "Xã hội",
            "Văn hóa - Xã hội",
            "Tâm lý học",
            "Giao tiếp",
            "Tiểu thuyết tình cảm",
            "Truyện ngắn - Tản văn",
        ],
        PersonalityGroup::Individual => &[
            "Du lịch",
            "Ẩm thực",
            "Nấu ăn",
            "Sở thích",
            "Thể thao - Giải trí",
            "Nuôi trồng",
            "Làm vườn",
            "Thiền",
            "Yoga",
            "Nghệ thuật sống",
            "Phong cách sống",
        ],
        PersonalityGroup::Thinker => &[
            "Khoa học - Kỹ thuật",
            "Lịch sử",
            "Địa lý",
            "Chính trị - Pháp luật",
            "Sách Học Tiếng Anh",
            "Sách giáo khoa",
            "Sách chuyên ngành",
            "Từ điển",
            "Sách tham khảo",
            "Khoa học phổ thông",
        ],
        PersonalityGroup::Achiever => &[
            "Bài học kinh doanh",
            "Sách Marketing - Bán hàng",
            "Sách kỹ năng làm việc",
            "Quản trị - Lãnh đạo",
            "Khởi nghiệp",
            "Tài chính - Kế toán",
            "Chứng khoán - Đầu tư",
            "Bất động sản",
            "Thể thao",
            "Bóng đá",
            "Truyền cảm hứng",
        ],
        PersonalityGroup::Builder => &[
            "Tiểu Thuyết",
            "Truyện ngắn - Tản văn - Tạp Văn",
            "Thơ ca",
            "Tác phẩm kinh điển",
            "Văn học",
            "Nghệ thuật",
            "Sách nghệ thuật sống đẹp",
            "Âm nhạc",
            "Hội họa",
            "Nhiếp ảnh",
            "Thời trang",
            "Làm đẹp",
            "Kiến trúc",
            "Thiết kế",
        ],
    }
}

pub fn synthesizer_categories(group: PersonalityGroup) -> &'static [&'static str] {
    match group {
        PersonalityGroup::Connector => &[
            "Triết học",
            "Tôn giáo",
            "Tâm lý học sâu",
            "Văn học phản tư",
            "Khoa học xã hội",
        ],
        PersonalityGroup::Individual => &[
            "Triết học về tự do",
            "Nghệ thuật",
            "Văn học hiện đại",
            "Tư tưởng độc lập",
        ],
        PersonalityGroup::Thinker => &[
            "Triết học khoa học",
            "Lịch sử tư tưởng",
            "Khoa học liên ngành",
            "Tư duy hệ thống",
        ],
        PersonalityGroup::Achiever => &[
            "Chiến lược cấp cao",
            "Lý thuyết quản trị",
            "Case study phức tạp",
            "Tư duy chiến lược",
        ],
        PersonalityGroup::Builder => &[
            "Nghệ thuật đương đại",
            "Lý thuyết sáng tạo",
            "Văn học hiện đại",
            "Triết học nghệ thuật",
        ],
    }
}

/// Semantic families: when a target category contains the family key,
/// any of the related tokens appearing in the book's category counts as
/// a hit.
const CATEGORY_ALIASES: [(&str, &[&str]); 8] = [
    ("tâm lý", &["psychology", "tâm lí", "tâm thần", "mental"]),
    ("kinh doanh", &["business", "bán hàng", "marketing", "quản trị", "startup"]),
    ("khoa học", &["science", "kỹ thuật", "công nghệ", "technology"]),
    ("văn học", &["literature", "tiểu thuyết", "truyện", "tác phẩm"]),
    ("nghệ thuật", &["art", "hội họa", "thiết kế", "design"]),
    ("du lịch", &["travel", "du ký", "phiêu lưu"]),
    ("sức khỏe", &["health", "y học", "medical", "làm đẹp"]),
    ("tài chính", &["finance", "tiền tệ", "đầu tư", "investment", "chứng khoán"]),
];

/// Both arguments must already be case-folded.
pub fn alias_match(actual: &str, target: &str) -> bool {
    CATEGORY_ALIASES.iter().any(|(family, related)| {
        target.contains(family) && related.iter().any(|token| actual.contains(token))
    })
}
