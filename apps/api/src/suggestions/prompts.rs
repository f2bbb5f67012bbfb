// All LLM prompt constants for the suggestion pipeline.
// Templates use `{placeholder}` markers replaced before sending.

/// Vacancy-field suggestion prompt. Replace `{title}` before sending.
pub const VACANCY_FIELDS_PROMPT_TEMPLATE: &str = r#"Ты — HR-ассистент. По названию вакансии: "{title}"
Сгенерируй JSON с ключами:
- description: краткое описание вакансии
- requirements: список основных требований (в одном тексте, с разделителями)
- salary: примерная рыночная зарплата в рублях (целое число)

Формат ответа строго JSON без лишнего текста.
Пример:
{
  "description": "Краткое описание...",
  "requirements": "Требование 1; Требование 2; Требование 3",
  "salary": 120000
}"#;

/// Interview-question suggestion prompt.
/// Replace `{count}`, `{title}`, `{description}`, `{requirements}` before sending.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Ты — HR-ассистент. Составь {count} вопросов для собеседования по вакансии.

Название вакансии: "{title}"
Обязанности: {description}
Требования: {requirements}

Верни JSON-массив объектов с ключами:
- question_text: текст вопроса
- competence: проверяемая компетенция (навык или качество)
- weight: вес вопроса, число от 0.0 до 1.0

Формат ответа строго JSON без лишнего текста.
Пример:
[
  {"question_text": "Расскажите о вашем опыте...", "competence": "Коммуникация", "weight": 0.8}
]"#;
