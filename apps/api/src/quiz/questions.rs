//! Static quiz catalogs for both tracks.
//!
//! Pure data. Built once at startup; prompts and choice texts are the
//! Vietnamese originals served verbatim to clients.

use super::models::{
    DiscoveryChoice, Field, LearningStyle, Motivation, PersonalityGroup, Presentation,
    ProfessionalAttribute, ProfessionalChoice, Question, QuestionBank,
};

fn tagged(text: &'static str, group: PersonalityGroup) -> DiscoveryChoice {
    DiscoveryChoice {
        text,
        group: Some(group),
        synthesizer: false,
    }
}

/// A synthesizer-flagged choice without a canonical group tag; it feeds
/// the synthesizer counter only.
fn synth(text: &'static str) -> DiscoveryChoice {
    DiscoveryChoice {
        text,
        group: None,
        synthesizer: true,
    }
}

fn plain(text: &'static str, attribute: ProfessionalAttribute) -> ProfessionalChoice {
    ProfessionalChoice {
        text,
        attribute,
        synthesizer_potential: false,
    }
}

fn diagnostic(text: &'static str, attribute: ProfessionalAttribute) -> ProfessionalChoice {
    ProfessionalChoice {
        text,
        attribute,
        synthesizer_potential: true,
    }
}

pub fn discovery_questions() -> Vec<Question<DiscoveryChoice>> {
    use PersonalityGroup::*;
    vec![
        Question {
            id: "Q1",
            prompt: "Nếu một cuốn sách có linh hồn, linh hồn ấy nên làm gì cùng bạn?",
            choices: vec![
                ('A', tagged("Cùng bạn đi qua những vùng cảm xúc sâu thẳm, để hiểu và được hiểu.", Connector)),
                ('B', tagged("Thức tỉnh trong bạn khát vọng tự do và bản sắc cá nhân.", Individual)),
                ('C', tagged("Mở ra những bí mật ẩn sau tri thức của thế giới.", Thinker)),
                ('D', tagged("Gieo trong bạn ngọn lửa chinh phục và thành tựu.", Achiever)),
                ('E', tagged("Dạy bạn cách xây một điều gì đó thực tế và bền vững.", Builder)),
            ],
        },
        Question {
            id: "Q2",
            prompt: "Khi bạn chọn đọc, điều khiến bạn \"ấn nút bắt đầu\" là:",
            choices: vec![
                ('A', tagged("Cảm xúc thôi thúc muốn đồng cảm với những người xa lạ.", Connector)),
                ('B', tagged("Niềm khao khát tự định nghĩa bản thân.", Individual)),
                ('C', tagged("Sự tò mò muốn giải mã một bí ẩn lớn.", Thinker)),
                ('D', tagged("Ham muốn tạo ra điều có giá trị trong thực tế.", Builder)),
                ('E', tagged("Mong muốn tiến gần hơn đến thành công.", Achiever)),
            ],
        },
        Question {
            id: "Q3",
            prompt: "Khi đọc xong một cuốn sách tuyệt vời, bạn cảm thấy...",
            choices: vec![
                ('A', tagged("Muốn chia sẻ và kết nối với ai đó.", Connector)),
                ('B', tagged("Muốn sáng tạo hoặc viết ra điều gì đó mới.", Individual)),
                ('C', tagged("Muốn tiếp tục tìm hiểu sâu hơn, đi đến tận cùng.", Thinker)),
                ('D', tagged("Muốn hành động và thử nghiệm ngay trong đời sống.", Achiever)),
                ('E', synth("Muốn chiêm nghiệm, tổng hợp lại mọi điều trong đầu.")),
            ],
        },
        Question {
            id: "Q4",
            prompt: "Khi cầm một cuốn sách, tâm trí bạn giống như:",
            choices: vec![
                ('A', tagged("Một người thám hiểm muốn ghi nhớ từng chi tiết.", Thinker)),
                ('B', tagged("Một nhà du hành tự do lang thang qua nhiều vùng ý tưởng.", Individual)),
                ('C', synth("Một người kết hợp cả hai: học sâu rồi liên kết rộng.")),
            ],
        },
        Question {
            id: "Q5",
            prompt: "Trong một cuộc trò chuyện về sách, bạn thường:",
            choices: vec![
                ('A', tagged("Lắng nghe câu chuyện và cảm xúc của người khác.", Connector)),
                ('B', tagged("Chia sẻ góc nhìn riêng biệt và tư tưởng của mình.", Individual)),
                ('C', synth("Phân tích, kết nối và làm rõ những luận điểm trái chiều.")),
            ],
        },
        Question {
            id: "Q6",
            prompt: "Cảm giác lý tưởng của bạn khi đọc là:",
            choices: vec![
                ('A', tagged("Bình yên, được hiểu.", Connector)),
                ('B', tagged("Tự do, bay bổng.", Individual)),
                ('C', tagged("Sâu thẳm, tập trung.", Thinker)),
                ('D', tagged("Hứng khởi, đầy năng lượng.", Achiever)),
                ('E', synth("Khám phá liên tục và \"ghép các mảnh hình ảnh tri thức lại\".")),
            ],
        },
        Question {
            id: "Q7",
            prompt: "Một cuốn sách lý tưởng nên:",
            choices: vec![
                ('A', tagged("Là lời tâm sự chân thành.", Connector)),
                ('B', tagged("Là tiếng gọi phiêu lưu.", Individual)),
                ('C', tagged("Là cánh cửa tri thức.", Thinker)),
                ('D', tagged("Là cẩm nang thành công.", Achiever)),
                ('E', synth("Là tấm gương soi phản chiếu mọi điều bạn từng nghĩ.")),
            ],
        },
        Question {
            id: "Q8",
            prompt: "Khi bạn đọc đến một ý tưởng khó hiểu, bạn:",
            choices: vec![
                ('A', tagged("Bỏ qua và tiếp tục, vì cảm xúc là quan trọng nhất.", Connector)),
                ('B', tagged("Ghi chú lại để tìm hiểu sau.", Thinker)),
                ('C', synth("Truy tìm tất cả các nguồn liên quan, từ video, nghiên cứu, đến sách khác.")),
            ],
        },
    ]
}

pub fn professional_questions() -> Vec<Question<ProfessionalChoice>> {
    use ProfessionalAttribute as Attr;
    vec![
        Question {
            id: "Q1",
            prompt: "Lĩnh vực bạn muốn đào sâu là gì?",
            choices: vec![
                ('A', plain("Kinh tế - Quản Trị - Tài chính", Attr::Field(Field::Business))),
                ('B', plain("Xã Hội - Nhân Văn", Attr::Field(Field::Humanities))),
                ('C', plain("Khoa học tự nhiên", Attr::Field(Field::Science))),
                ('D', plain("Công nghệ - Kỹ thuật", Attr::Field(Field::Technology))),
                ('E', plain("Y - Dược học", Attr::Field(Field::Medical))),
                ('F', plain("Sư phạm - Giáo dục", Attr::Field(Field::Education))),
                ('G', plain("Nghệ thuật - Thiết kế - Kiến trúc", Attr::Field(Field::Arts))),
                ('H', plain("Nông - Lâm - Ngư nghiệp", Attr::Field(Field::Agriculture))),
            ],
        },
        Question {
            id: "Q2",
            prompt: "Mục tiêu đọc của bạn là:",
            choices: vec![
                ('A', plain("Xây nền tảng lý thuyết vững chắc.", Attr::Motivation(Motivation::Foundational))),
                ('B', plain("Giải quyết vấn đề thực tế trong công việc.", Attr::Motivation(Motivation::Practical))),
                ('C', plain("Mở rộng tư duy và khám phá tri thức mới.", Attr::Motivation(Motivation::Exploratory))),
            ],
        },
        Question {
            id: "Q3",
            prompt: "Khi học một vấn đề mới, bạn thích:",
            choices: vec![
                ('A', plain("Có lộ trình rõ ràng, từ cơ bản đến nâng cao.", Attr::Style(LearningStyle::Structured))),
                ('B', diagnostic("Tự mình tìm các liên kết giữa các lĩnh vực.", Attr::Style(LearningStyle::Integrative))),
            ],
        },
        Question {
            id: "Q4",
            prompt: "Cách trình bày bạn thấy hấp dẫn nhất:",
            choices: vec![
                ('A', plain("Sách học chuyên sâu, chặt chẽ, có trích dẫn.", Attr::Presentation(Presentation::Analytical))),
                ('B', plain("Sách kể chuyện sinh động, dễ hiểu.", Attr::Presentation(Presentation::Narrative))),
                ('C', diagnostic("Sách có khả năng kết nối lý thuyết với góc nhìn đa ngành.", Attr::Presentation(Presentation::Integrative))),
            ],
        },
    ]
}

impl QuestionBank {
    /// The standard catalogs: the eight-question discovery flow and the
    /// four-question professional flow.
    pub fn standard() -> Self {
        QuestionBank {
            discovery: discovery_questions(),
            professional: professional_questions(),
        }
    }
}
