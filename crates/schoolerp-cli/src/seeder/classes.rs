use schoolerp_models::academics::ClassRoom;

const STREAMS: [&str; 4] = ["A", "B", "C", "D"];

/// Classes named `Grade <n><stream>`, with class teachers assigned
/// round-robin from `teacher_ids`.
pub fn generate_classes(count: usize, year: i32, teacher_ids: &[String]) -> Vec<ClassRoom> {
    (0..count)
        .map(|idx| ClassRoom {
            name: format!("Grade {}{}", idx / STREAMS.len() + 1, STREAMS[idx % STREAMS.len()]),
            year,
            class_teacher_id: (!teacher_ids.is_empty())
                .then(|| teacher_ids[idx % teacher_ids.len()].clone()),
            subject_ids: Vec::new(),
        })
        .collect()
}
