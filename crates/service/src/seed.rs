//! Development/demo data for the portal. Every named entity is created via
//! lookup-or-create on its natural key (name, email, title), so running the
//! seeder repeatedly never duplicates it. Sample appointments carry no
//! natural key; they are only generated while the appointment table is
//! empty, which keeps the whole operation idempotent.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use models::{
    appointment, branch, category, news, service, service_statistic, status, user,
};

use crate::errors::ServiceError;

pub const CATEGORY_NAMES: [&str; 10] = [
    "Паспортные услуги",
    "Регистрационные услуги",
    "Налоговые услуги",
    "Социальные услуги",
    "Юридические услуги",
    "Транспортные услуги",
    "Недвижимость",
    "Бизнес",
    "Семья и дети",
    "Образование",
];

pub const STATUS_NAMES: [&str; 4] = ["Ожидание", "Подтверждено", "Выполнено", "Отменено"];

pub struct SeedService {
    pub name: &'static str,
    pub category: usize,
    pub duty: i64,
    pub description: &'static str,
}

pub const SERVICES: [SeedService; 15] = [
    SeedService {
        name: "Замена паспорта РФ",
        category: 0,
        duty: 300,
        description: "Замена паспорта РФ при достижении 20 и 45 лет",
    },
    SeedService {
        name: "Выдача загранпаспорта",
        category: 0,
        duty: 5000,
        description: "Оформление заграничного паспорта старого и нового образца",
    },
    SeedService {
        name: "Регистрация по месту жительства",
        category: 1,
        duty: 0,
        description: "Постоянная регистрация по месту жительства",
    },
    SeedService {
        name: "Регистрация брака",
        category: 8,
        duty: 350,
        description: "Государственная регистрация брака",
    },
    SeedService {
        name: "Получение ИНН",
        category: 2,
        duty: 0,
        description: "Получение идентификационного номера налогоплательщика",
    },
    SeedService {
        name: "Регистрация ИП",
        category: 7,
        duty: 800,
        description: "Государственная регистрация индивидуального предпринимателя",
    },
    SeedService {
        name: "Получение справки о несудимости",
        category: 4,
        duty: 1000,
        description: "Выдача справки об отсутствии судимости",
    },
    SeedService {
        name: "Обмен водительского удостоверения",
        category: 5,
        duty: 2000,
        description: "Замена водительского удостоверения",
    },
    SeedService {
        name: "Регистрация автомобиля",
        category: 5,
        duty: 2000,
        description: "Постановка автомобиля на учет в ГИБДД",
    },
    SeedService {
        name: "Получение материнского капитала",
        category: 3,
        duty: 0,
        description: "Оформление сертификата на материнский капитал",
    },
    SeedService {
        name: "Оформление пенсии",
        category: 3,
        duty: 0,
        description: "Назначение и оформление пенсии",
    },
    SeedService {
        name: "Получение свидетельства о рождении",
        category: 8,
        duty: 0,
        description: "Государственная регистрация рождения",
    },
    SeedService {
        name: "Оформление инвалидности",
        category: 3,
        duty: 0,
        description: "Медико-социальная экспертиза",
    },
    SeedService {
        name: "Получение льгот",
        category: 3,
        duty: 0,
        description: "Оформление социальных льгот",
    },
    SeedService {
        name: "Регистрация права собственности",
        category: 6,
        duty: 2000,
        description: "Государственная регистрация права на недвижимость",
    },
];

pub struct SeedBranch {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

const WORK_HOURS: &str = "09:00-18:00 (Пн-Пт), 10:00-16:00 (Сб)";

pub const BRANCHES: [SeedBranch; 12] = [
    SeedBranch { name: "МФЦ Центральный", address: "ул. Ленина, 1", phone: "+79161234567" },
    SeedBranch { name: "МФЦ Северный", address: "пр. Мира, 25", phone: "+79161234568" },
    SeedBranch { name: "МФЦ Южный", address: "ул. Садовая, 15", phone: "+79161234569" },
    SeedBranch { name: "МФЦ Западный", address: "ул. Победы, 10", phone: "+79161234570" },
    SeedBranch { name: "МФЦ Восточный", address: "пр. Строителей, 5", phone: "+79161234571" },
    SeedBranch { name: "МФЦ Центр-2", address: "ул. Советская, 33", phone: "+79161234572" },
    SeedBranch { name: "МФЦ Приморский", address: "наб. Речная, 8", phone: "+79161234573" },
    SeedBranch { name: "МФЦ Горный", address: "ул. Горная, 12", phone: "+79161234574" },
    SeedBranch { name: "МФЦ Парковый", address: "ул. Парковая, 7", phone: "+79161234575" },
    SeedBranch { name: "МФЦ Студенческий", address: "пр. Студенческий, 20", phone: "+79161234576" },
    SeedBranch { name: "МФЦ Торговый", address: "ул. Торговая, 45", phone: "+79161234577" },
    SeedBranch { name: "МФЦ Заречный", address: "ул. Заречная, 3", phone: "+79161234578" },
];

pub const NEWS: [(&str, &str); 10] = [
    (
        "Открытие нового филиала МФЦ",
        "Сообщаем об открытии нового современного филиала МФЦ в центре города. Новый филиал оснащен современным оборудованием и предлагает расширенный перечень услуг.",
    ),
    (
        "Упрощена процедура получения паспорта",
        "С 1 января 2024 года упрощена процедура получения и замены паспорта РФ. Теперь для подачи заявления требуется меньше документов.",
    ),
    (
        "Электронная запись на услуги",
        "Теперь вы можете записаться на любую услугу через личный кабинет на нашем портале. Это сэкономит ваше время и позволит избежать очередей.",
    ),
    (
        "Новые услуги в МФЦ",
        "Добавлены 5 новых государственных услуг, доступных во всех филиалах. Список услуг постоянно расширяется для вашего удобства.",
    ),
    (
        "Изменение графика работы",
        "Обратите внимание на изменение графика работы филиалов в праздничные дни. Актуальное расписание доступно на сайте.",
    ),
    (
        "Мобильное приложение МФЦ",
        "Теперь все услуги доступны в мобильном приложении. Скачайте приложение в App Store или Google Play.",
    ),
    (
        "Бесплатные консультации",
        "Всем гражданам предоставляются бесплатные консультации по вопросам получения государственных услуг.",
    ),
    (
        "Обновление системы онлайн-записи",
        "Проведено обновление системы онлайн-записи. Теперь система работает быстрее и стабильнее.",
    ),
    (
        "Скидки для пенсионеров",
        "Введены скидки на государственные пошлины для пенсионеров при обращении в МФЦ.",
    ),
    (
        "Расширение перечня электронных услуг",
        "Добавлено 15 новых электронных услуг, которые можно получить не выходя из дома.",
    ),
];

pub const SAMPLE_USER_EMAIL: &str = "test@example.com";
const SAMPLE_APPOINTMENTS: usize = 20;

async fn find_or_create_service(
    db: &DatabaseConnection,
    data: &SeedService,
    categories: &[category::Model],
) -> Result<service::Model, ServiceError> {
    use sea_orm::{ColumnTrait, QueryFilter};
    if let Some(found) = service::Entity::find()
        .filter(service::Column::Name.eq(data.name))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
    {
        return Ok(found);
    }
    let am = service::ActiveModel {
        category_id: Set(categories.get(data.category).map(|c| c.category_id)),
        name: Set(data.name.to_string()),
        description: Set(Some(data.description.to_string())),
        state_duty: Set(Decimal::from(data.duty)),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert a statistic row with randomized demo counts; keeps existing rows.
async fn seed_statistic(db: &DatabaseConnection, service_id: i32) -> Result<(), ServiceError> {
    let (views, bookings) = {
        let mut rng = rand::thread_rng();
        (rng.gen_range(50..=500), rng.gen_range(5..=50))
    };
    let am = service_statistic::ActiveModel {
        service_id: Set(service_id),
        view_count: Set(views),
        appointment_count: Set(bookings),
        ..Default::default()
    };
    match service_statistic::Entity::insert(am)
        .on_conflict(
            OnConflict::column(service_statistic::Column::ServiceId).do_nothing().to_owned(),
        )
        .exec(db)
        .await
    {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(ServiceError::Db(e.to_string())),
    }
}

/// Populate reference data for development and demo environments.
pub async fn run(db: &DatabaseConnection) -> Result<(), ServiceError> {
    info!("seeding sample data");

    let mut categories = Vec::with_capacity(CATEGORY_NAMES.len());
    for name in CATEGORY_NAMES {
        categories.push(category::find_or_create(db, name).await?);
    }

    let mut statuses = Vec::with_capacity(STATUS_NAMES.len());
    for name in STATUS_NAMES {
        statuses.push(status::find_or_create(db, name).await?);
    }

    let mut services = Vec::with_capacity(SERVICES.len());
    for data in &SERVICES {
        services.push(find_or_create_service(db, data, &categories).await?);
    }

    let mut branches = Vec::with_capacity(BRANCHES.len());
    for data in &BRANCHES {
        branches.push(
            branch::find_or_create(
                db,
                branch::NewBranch {
                    name: data.name,
                    address: data.address,
                    phone: Some(data.phone),
                    work_hours: WORK_HOURS,
                },
            )
            .await?,
        );
    }

    for (title, content) in NEWS {
        news::find_or_create(db, title, content).await?;
    }

    let sample_user = user::find_or_create(
        db,
        user::NewUser {
            email: SAMPLE_USER_EMAIL,
            username: "testuser",
            first_name: "Иван",
            last_name: "Петров",
            phone: Some("+79160000000"),
        },
    )
    .await?;

    for svc in &services {
        seed_statistic(db, svc.service_id).await?;
    }

    let existing = appointment::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing == 0 {
        let today = Utc::now().date_naive();
        for _ in 0..SAMPLE_APPOINTMENTS {
            let (service_idx, branch_idx, status_idx, day_offset, hour) = {
                let mut rng = rand::thread_rng();
                (
                    rng.gen_range(0..services.len()),
                    rng.gen_range(0..branches.len()),
                    rng.gen_range(0..statuses.len()),
                    rng.gen_range(1..=30u64),
                    rng.gen_range(9..=17u32),
                )
            };
            let now = Utc::now().into();
            let am = appointment::ActiveModel {
                user_id: Set(sample_user.user_id),
                service_id: Set(Some(services[service_idx].service_id)),
                branch_id: Set(Some(branches[branch_idx].branch_id)),
                status_id: Set(Some(statuses[status_idx].status_id)),
                desired_date: Set(today + chrono::Days::new(day_offset)),
                desired_time: Set(chrono::NaiveTime::from_hms_opt(hour, 0, 0)
                    .unwrap_or_default()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        }
        info!(count = SAMPLE_APPOINTMENTS, "created sample appointments");
    }

    info!("sample data ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use anyhow::Result;
    use sea_orm::{ColumnTrait, QueryFilter};

    #[test]
    fn fixture_tables_match_expected_sizes() {
        assert_eq!(CATEGORY_NAMES.len(), 10);
        assert_eq!(STATUS_NAMES.len(), 4);
        assert_eq!(SERVICES.len(), 15);
        assert_eq!(BRANCHES.len(), 12);
        assert_eq!(NEWS.len(), 10);
    }

    #[test]
    fn fixture_services_reference_valid_categories() {
        for data in &SERVICES {
            assert!(data.category < CATEGORY_NAMES.len(), "{} out of range", data.name);
            assert!(data.duty >= 0);
        }
        let passport = SERVICES.iter().find(|s| s.name == "Замена паспорта РФ").unwrap();
        assert_eq!(passport.duty, 300);
    }

    #[tokio::test]
    async fn seeding_twice_creates_no_duplicates() -> Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };

        run(&db).await?;
        run(&db).await?;

        let passport = service::Entity::find()
            .filter(service::Column::Name.eq("Замена паспорта РФ"))
            .count(&db)
            .await?;
        assert_eq!(passport, 1);
        let categories = category::Entity::find()
            .filter(category::Column::Name.is_in(CATEGORY_NAMES))
            .count(&db)
            .await?;
        assert_eq!(categories, CATEGORY_NAMES.len() as u64);
        let users = user::Entity::find()
            .filter(user::Column::Email.eq(SAMPLE_USER_EMAIL))
            .count(&db)
            .await?;
        assert_eq!(users, 1);
        Ok(())
    }
}
