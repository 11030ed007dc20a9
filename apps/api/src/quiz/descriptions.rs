//! Static prose served alongside resolved profiles.

use serde::Serialize;

use super::models::{Field, LearningStyle, Motivation, PersonalityGroup, Presentation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDescription {
    pub title: &'static str,
    pub description: &'static str,
    pub books: &'static str,
    pub traits: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesizer_note: Option<&'static str>,
}

const SYNTHESIZER_NOTE: &str = "🔗 Đặc điểm Synthesizer: Bạn có khả năng tư duy tổng hợp cao, \
thích kết nối tri thức từ nhiều lĩnh vực khác nhau. Phù hợp với sách có chiều sâu và khả năng \
liên kết đa ngành.";

pub fn describe_group(group: PersonalityGroup, is_synthesizer: bool) -> GroupDescription {
    let (title, description, books, traits) = match group {
        PersonalityGroup::Connector => (
            "🤝 The Connectors - Người Kết nối",
            "Bạn đọc sách để tìm kiếm sự hòa hợp, tình yêu và cảm giác thuộc về. Bạn thích \
             những câu chuyện chạm đến trái tim, giúp bạn hiểu và đồng cảm với người khác.",
            "Tâm lý tình cảm, chữa lành, tản văn, tiểu thuyết gia đình",
            "Đồng cảm cao, thích kết nối, ưa câu chuyện cảm động",
        ),
        PersonalityGroup::Individual => (
            "🕊️ The Individuals - Người Tự do",
            "Bạn tìm kiếm tự do, thể hiện bản sắc cá nhân và phá vỡ khuôn mẫu. Đọc sách là \
             cách bạn khám phá thế giới và định hình cá tính riêng.",
            "Du ký, nghệ thuật sống, tiểu thuyết sáng tạo, sách phản tư xã hội",
            "Độc lập, sáng tạo, thích khám phá bản thân",
        ),
        PersonalityGroup::Thinker => (
            "🧠 The Thinkers - Người Tư duy",
            "Bạn tìm kiếm tri thức, sự thật và lý giải thế giới. Mỗi cuốn sách là một câu hỏi \
             cần được trả lời, một bí ẩn cần được khám phá.",
            "Khoa học phổ thông, triết học, lịch sử, sách phân tích chuyên sâu",
            "Hiếu học, logic, thích phân tích và tìm hiểu",
        ),
        PersonalityGroup::Achiever => (
            "🏆 The Achievers - Người Chinh phục",
            "Bạn muốn vượt qua thử thách, tạo ra thành tựu và biến ý tưởng thành hiện thực. \
             Sách là công cụ giúp bạn đạt được mục tiêu.",
            "Sách truyền cảm hứng, lãnh đạo, chiến lược, hồi ký thành công",
            "Quyết đoán, hướng mục tiêu, thích thách thức",
        ),
        PersonalityGroup::Builder => (
            "🏗️ The Builders - Người Xây dựng",
            "Bạn muốn xây dựng nền tảng vững chắc, phát triển kỹ năng thực tế. Bạn thích \
             những cuốn sách có tính ứng dụng cao.",
            "Sách kỹ năng, tài chính, marketing, khởi nghiệp, sách hướng nghiệp",
            "Thực tế, có hệ thống, thích xây dựng và phát triển",
        ),
    };
    GroupDescription {
        title,
        description,
        books,
        traits,
        synthesizer_note: is_synthesizer.then_some(SYNTHESIZER_NOTE),
    }
}

pub fn describe_field(field: Field) -> &'static str {
    match field {
        Field::Business => {
            "Kinh tế - Quản trị - Tài chính: Lĩnh vực kinh doanh, quản lý và tài chính"
        }
        Field::Humanities => {
            "Xã hội - Nhân văn: Khoa học xã hội, văn học, lịch sử, triết học"
        }
        Field::Science => "Khoa học tự nhiên: Toán, lý, hóa, sinh, địa lý",
        Field::Technology => "Công nghệ - Kỹ thuật: IT, kỹ thuật, công nghệ thông tin",
        Field::Medical => "Y - Dược học: Y khoa, dược phẩm, sức khỏe",
        Field::Education => "Sư phạm - Giáo dục: Giảng dạy, đào tạo, phát triển con người",
        Field::Arts => "Nghệ thuật - Thiết kế - Kiến trúc: Sáng tạo, thiết kế, nghệ thuật",
        Field::Agriculture => "Nông - Lâm - Ngư nghiệp: Nông nghiệp, lâm nghiệp, thủy sản",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningTips {
    pub motivation_tip: &'static str,
    pub style_tip: &'static str,
    pub presentation_tip: &'static str,
}

pub fn learning_tips(
    motivation: Motivation,
    style: LearningStyle,
    presentation: Presentation,
) -> LearningTips {
    let motivation_tip = match motivation {
        Motivation::Foundational => {
            "Nên đọc sách có hệ thống, từ cơ bản đến nâng cao, có cấu trúc rõ ràng"
        }
        Motivation::Practical => {
            "Ưu tiên sách hướng dẫn thực hành, case study, cẩm nang ứng dụng"
        }
        Motivation::Exploratory => {
            "Thích hợp với sách phản biện, góc nhìn đổi mới, tư duy đột phá"
        }
    };
    let style_tip = match style {
        LearningStyle::Structured => "Phù hợp với giáo trình, sách có lộ trình học tập từng bước",
        LearningStyle::Integrative => "Nên đọc sách liên ngành, tổng hợp, có tính kết nối cao",
    };
    let presentation_tip = match presentation {
        Presentation::Analytical => "Ưa thích sách chuyên sâu, có trích dẫn, nghiên cứu khoa học",
        Presentation::Narrative => "Thích sách kể chuyện, ví dụ thực tế, dễ hiểu",
        Presentation::Integrative => "Phù hợp với sách đa ngành, tư duy hệ thống",
    };
    LearningTips {
        motivation_tip,
        style_tip,
        presentation_tip,
    }
}
