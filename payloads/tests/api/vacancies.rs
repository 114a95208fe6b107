use payloads::ItemId;
use payloads::normalize::{
    DEFAULT_SALARY, NO_DESCRIPTION, NOT_SPECIFIED,
};
use payloads::requests::VacancyScope;
use test_helpers::spawn_app;

#[tokio::test]
async fn list_fields_in_every_shape() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let vacancies = app.client.list_vacancies(VacancyScope::All).await?;
    assert_eq!(vacancies.len(), 3);

    let engineer = &vacancies.items[0];
    assert_eq!(
        engineer.requirements,
        vec!["BSc in Civil Engineering", "8 years of experience"]
    );
    assert_eq!(
        engineer.responsibilities,
        vec!["Review designs", "Supervise consultants"]
    );
    assert_eq!(engineer.benefits, vec!["Medical insurance", "Pension"]);
    assert_eq!(engineer.posted_date, "May 1, 2025");

    let technician = &vacancies.items[1];
    assert_eq!(technician.requirements, vec!["Diploma in Civil Engineering"]);
    assert!(technician.responsibilities.is_empty());
    assert_eq!(technician.benefits, vec!["3"]);
    assert_eq!(technician.job_type, "Contract");

    let officer = &vacancies.items[2];
    assert_eq!(officer.department, NOT_SPECIFIED);
    assert_eq!(officer.salary, DEFAULT_SALARY);
    assert_eq!(officer.description, NO_DESCRIPTION);
    assert_eq!(officer.job_type, "Full-Time");

    Ok(())
}

#[tokio::test]
async fn active_expired_and_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let active = app.client.list_vacancies(VacancyScope::Active).await?;
    assert_eq!(active.len(), 2);
    let expired = app.client.list_vacancies(VacancyScope::Expired).await?;
    assert_eq!(expired.len(), 1);
    assert_eq!(expired.items[0].deadline, "January 31, 2025");

    let vacancy = app.client.get_vacancy(&ItemId::from(2)).await?;
    assert_eq!(vacancy.title, "Materials Laboratory Technician");

    Ok(())
}
