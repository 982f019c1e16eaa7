//! Integration tests: controller → service → in-memory repositories.

use std::thread;

use registrar_adapters::{
    InMemoryCourseRepository, InMemoryEnrollmentRepository, InMemoryStudentRepository,
    builtin_roster::sample_roster,
};
use registrar_core::{
    application::{ApplicationError, EnrollmentController, EnrollmentService},
    domain::Course,
    prelude::*,
};

/// Fresh repositories seeded with the sample roster, plus handles onto them.
struct Fixture {
    students: InMemoryStudentRepository,
    courses: InMemoryCourseRepository,
    enrollments: InMemoryEnrollmentRepository,
    controller: EnrollmentController,
}

fn fixture() -> Fixture {
    let students = InMemoryStudentRepository::new();
    let courses = InMemoryCourseRepository::new();
    let enrollments = InMemoryEnrollmentRepository::new();

    sample_roster().seed(&students, &courses).unwrap();

    let service = EnrollmentService::new(
        Box::new(students.clone()),
        Box::new(courses.clone()),
        Box::new(enrollments.clone()),
    );

    Fixture {
        students,
        courses,
        enrollments,
        controller: EnrollmentController::new(service),
    }
}

fn credits_of(f: &Fixture, id: &str) -> u32 {
    f.students.find_by_id(id).unwrap().unwrap().current_credits()
}

#[test]
fn complete_enrollment_flow_success() {
    let f = fixture();

    let result = f.controller.enroll_student("S001", "C001");
    assert!(result.contains("SUCCESS"));
    assert!(result.contains("S001"));
    assert!(result.contains("C001"));

    let enrollment = f
        .enrollments
        .find_by_student_and_course("S001", "C001")
        .unwrap()
        .unwrap();
    assert_eq!(enrollment.grade(), 0.0);
    assert_eq!(credits_of(&f, "S001"), 3);
}

#[test]
fn enrollment_with_invalid_student() {
    let f = fixture();

    let result = f.controller.enroll_student("S999", "C001");
    assert!(result.starts_with("ERROR"));
    assert!(result.contains("Student not found"));
    assert!(f.enrollments.is_empty());
}

#[test]
fn enrollment_on_empty_repositories_reports_missing_student() {
    let service = EnrollmentService::new(
        Box::new(InMemoryStudentRepository::new()),
        Box::new(InMemoryCourseRepository::new()),
        Box::new(InMemoryEnrollmentRepository::new()),
    );

    let err = service.enroll("S999", "C001").unwrap_err();
    assert!(err.message().contains("Student not found"));
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn enrollment_with_invalid_course_writes_nothing() {
    let f = fixture();

    let result = f.controller.enroll_student("S001", "C999");
    assert_eq!(result, "ERROR: Course not found with ID: C999");
    assert!(f.enrollments.is_empty());
    assert_eq!(credits_of(&f, "S001"), 0);
}

#[test]
fn multiple_enrollments_and_gpa() {
    let f = fixture();

    assert!(f.controller.enroll_student("S001", "C001").contains("SUCCESS"));
    assert!(f.controller.enroll_student("S001", "C002").contains("SUCCESS"));

    f.controller.assign_grade("S001", "C001", 3.5);
    f.controller.assign_grade("S001", "C002", 4.0);

    let gpa_line = f.controller.student_gpa("S001");
    assert!(gpa_line.contains("GPA"));
    assert!(gpa_line.contains("3.79"), "unexpected line: {gpa_line}");

    let gpa = f.controller.service().calculate_gpa("S001").unwrap();
    assert!((gpa - 3.785).abs() < 0.01);
    assert_eq!(credits_of(&f, "S001"), 7);
}

#[test]
fn credit_limit_enforcement_across_layers() {
    let f = fixture();

    f.controller.enroll_student("S002", "C001");
    f.controller.enroll_student("S002", "C002");
    assert_eq!(credits_of(&f, "S002"), 7);

    f.courses
        .save(Course::new("C004", "Advanced Topics", 6))
        .unwrap();

    let result = f.controller.enroll_student("S002", "C004");
    assert_eq!(result, "ERROR: Student exceeds maximum credit limit");

    assert_eq!(credits_of(&f, "S002"), 7);
    assert!(
        f.enrollments
            .find_by_student_and_course("S002", "C004")
            .unwrap()
            .is_none()
    );
}

#[test]
fn student_lifecycle() {
    let f = fixture();

    f.controller.enroll_student("S001", "C001");
    assert_eq!(credits_of(&f, "S001"), 3);

    f.controller.enroll_student("S001", "C002");
    assert_eq!(credits_of(&f, "S001"), 7);

    f.enrollments.update_grade("S001", "C001", 3.0).unwrap();
    f.enrollments.update_grade("S001", "C002", 4.0).unwrap();

    let gpa = f.controller.service().calculate_gpa("S001").unwrap();
    assert!((gpa - 25.0 / 7.0).abs() < 0.01);
    assert_eq!(f.enrollments.find_by_student_id("S001").unwrap().len(), 2);
}

#[test]
fn different_students_share_a_course() {
    let f = fixture();

    assert!(f.controller.enroll_student("S001", "C001").contains("SUCCESS"));
    assert!(f.controller.enroll_student("S002", "C001").contains("SUCCESS"));

    assert!(
        f.enrollments
            .find_by_student_and_course("S001", "C001")
            .unwrap()
            .is_some()
    );
    assert!(
        f.enrollments
            .find_by_student_and_course("S002", "C001")
            .unwrap()
            .is_some()
    );
    assert_eq!(credits_of(&f, "S001"), 3);
    assert_eq!(credits_of(&f, "S002"), 3);
}

#[test]
fn gpa_is_idempotent_and_zero_without_enrollments() {
    let f = fixture();
    let service = f.controller.service();

    assert_eq!(service.calculate_gpa("S002").unwrap(), 0.0);

    service.enroll("S002", "C003").unwrap();
    service.assign_grade("S002", "C003", 2.7).unwrap();

    let first = service.calculate_gpa("S002").unwrap();
    let second = service.calculate_gpa("S002").unwrap();
    assert_eq!(first, second);
    assert!((first - 2.7).abs() < 1e-12);
}

#[test]
fn gpa_ignores_enrollments_whose_course_was_removed() {
    let f = fixture();
    let service = f.controller.service();

    service.enroll("S001", "C001").unwrap();
    service.enroll("S001", "C002").unwrap();
    service.assign_grade("S001", "C001", 2.0).unwrap();
    service.assign_grade("S001", "C002", 4.0).unwrap();

    f.courses.remove("C002").unwrap();

    assert_eq!(service.calculate_gpa("S001").unwrap(), 2.0);
}

#[test]
fn grading_an_unknown_enrollment_fails_cleanly() {
    let f = fixture();

    let line = f.controller.assign_grade("S001", "C003", 3.0);
    assert_eq!(
        line,
        "ERROR: Enrollment not found for student S001 in course C003"
    );
}

#[test]
fn concurrent_enrollments_never_break_the_credit_limit() {
    let f = fixture();
    for i in 0..20 {
        f.courses
            .save(Course::new(format!("X{i:02}"), "Seminar", 1))
            .unwrap();
    }

    // S002 can take 12 credits; twenty one-credit seminars race for them.
    let service = f.controller.service();
    let outcomes: Vec<bool> = thread::scope(|scope| {
        let handles: Vec<_> = (0..20)
            .map(|i| scope.spawn(move || service.enroll("S002", &format!("X{i:02}")).is_ok()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let accepted = outcomes.iter().filter(|ok| **ok).count();
    assert_eq!(accepted, 12);
    assert_eq!(credits_of(&f, "S002"), 12);
    assert_eq!(f.enrollments.find_by_student_id("S002").unwrap().len(), 12);
}

/// Enrollment store that accepts reads but refuses every write.
struct ReadOnlyEnrollments(InMemoryEnrollmentRepository);

impl EnrollmentRepository for ReadOnlyEnrollments {
    fn save(&self, _enrollment: Enrollment) -> RegistrarResult<Enrollment> {
        Err(ApplicationError::StoreLockError.into())
    }

    fn find_by_student_id(&self, student_id: &str) -> RegistrarResult<Vec<Enrollment>> {
        self.0.find_by_student_id(student_id)
    }

    fn find_by_student_and_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> RegistrarResult<Option<Enrollment>> {
        self.0.find_by_student_and_course(student_id, course_id)
    }

    fn update_grade(
        &self,
        student_id: &str,
        course_id: &str,
        grade: f64,
    ) -> RegistrarResult<Option<Enrollment>> {
        self.0.update_grade(student_id, course_id, grade)
    }

    fn find_all(&self) -> RegistrarResult<Vec<Enrollment>> {
        self.0.find_all()
    }
}

#[test]
fn failed_enrollment_write_leaves_no_trace() {
    let students = InMemoryStudentRepository::new();
    let courses = InMemoryCourseRepository::new();
    let enrollments = InMemoryEnrollmentRepository::new();
    sample_roster().seed(&students, &courses).unwrap();

    let controller = EnrollmentController::new(EnrollmentService::new(
        Box::new(students.clone()),
        Box::new(courses),
        Box::new(ReadOnlyEnrollments(enrollments.clone())),
    ));

    let line = controller.enroll_student("S001", "C001");
    assert_eq!(line, "ERROR: Repository store error");

    let student = students.find_by_id("S001").unwrap().unwrap();
    assert_eq!(student.current_credits(), 0);
    assert!(enrollments.find_by_student_id("S001").unwrap().is_empty());
}
