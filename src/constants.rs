//! Parametros de configuracion por defecto del bar

/// Paciencia base (en segundos) de un cliente. Se divide por la dificultad.
pub const BASE_PATIENCE: f32 = 10.0;

/// Velocidad a la que caminan los personajes (unidades por segundo)
pub const WALK_SPEED: f32 = 5.0;

/// Distancia a la que un personaje se considera llegado a su destino
pub const MIN_DISTANCE: f32 = 2.0;

/// Distancia maxima a la barra para que un cliente haga su pedido
pub const MAX_DISTANCE: f32 = 3.0;

/// Cantidad maxima de clientes en la fila (se permite uno mas mientras la fila este en el limite)
pub const CUSTOMER_LIMIT: usize = 3;

/// Rango (en segundos) entre la llegada de un cliente y el siguiente
pub const SPAWN_INTERVAL_RANGE: (f32, f32) = (2.0, 5.0);

/// Demora antes de evaluar la primera llegada de un sponsor
pub const SPONSOR_INITIAL_DELAY: f32 = 1.0;

/// Tiempo entre visitas de sponsors una vez que aparecio el primero
pub const SPONSOR_INTERVAL: f32 = 100.0;

/// Reputacion que hay que superar para que aparezcan sponsors
pub const REPUTATION_THRESHOLD: i32 = 10;

/// Tiempo (en segundos) que un sponsor espera una respuesta antes de rechazar el contrato
pub const CONTRACT_WINDOW: f32 = 5.0;

/// Dinero que paga un sponsor al aceptar su contrato
pub const CONTRACT_FEE: u32 = 50;

/// Altura que alcanza el liquido en el vaso lleno
pub const VESSEL_CAPACITY: f32 = 2.0;

/// Cuanto sube (o baja) el nivel del vaso por cada unidad servida
pub const VESSEL_STEP: f32 = 0.1;

/// Angulos (exclusivos) entre los que un recipiente inclinado vuelca su contenido
pub const TILT_RANGE: (f32, f32) = (80.0, 280.0);

/// Puntaje por encima del cual un cliente queda conforme
pub const SATISFACTION_LOW: i32 = 40;

/// Puntaje por encima del cual un cliente puede dejar propina
pub const SATISFACTION_HIGH: i32 = 80;

/// Probabilidad de que un cliente muy satisfecho deje propina
pub const TIP_CHANCE: f64 = 0.25;

/// Rango de la propina (el maximo es exclusivo)
pub const TIP_RANGE: (u32, u32) = (1, 5);

/// Segundos reales que dura un dia mientras el bar esta abierto
pub const SECONDS_PER_OPEN_DAY: f32 = 60.0;

/// Segundos reales que dura un dia mientras el bar esta cerrado
pub const SECONDS_PER_CLOSED_DAY: f32 = 300.0;

/// Hora a partir de la cual el bar cierra
pub const CLOSING_HOUR: u32 = 4;

/// Ultima hora en la que el bar sigue cerrado
pub const REOPENING_HOUR: u32 = 10;

/// Cada cuantos segundos simulados se imprimen las estadisticas
pub const STATISTICS_INTERVAL: f32 = 15.0;

/// Duracion de cada tick de la simulacion (30 ticks por segundo)
pub const TICK_DELTA: f32 = 1.0 / 30.0;

/// Duracion total por defecto de la simulacion
pub const SIMULATION_SECONDS: f32 = 600.0;

/// Probabilidad de que el barman se equivoque de botella
pub const BARTENDER_MISTAKE_CHANCE: f64 = 0.1;

/// Dificultad por defecto
pub const DIFFICULTY: u32 = 1;

/// Probabilidad de que un cliente pida un trago inventado por la casa
pub const HOUSE_SPECIAL_CHANCE: f64 = 0.1;
