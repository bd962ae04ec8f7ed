//! The fixed equipment catalog printed on every checklist.
//!
//! Rows appear in document order. Codes follow the section numbering of the
//! regulation the checklist audits (A: basic, B: emergency, C: intensive care,
//! D: psychiatric transport).

/// A catalog row: item code and its printed label.
pub type CatalogEntry = (&'static str, &'static str);

/// Every checklist row, in the order it is printed.
pub const CATALOG: &[CatalogEntry] = &[
    // A.1
    ("A.1.1.1", "Cinturones de seguridad en todos los asientos;"),
    ("A.1.1.2", "Equipo básico de herramientas de mano;"),
    ("A.1.1.3", "Equipo básico de señalización que incluya traficonos y triángulos reflejantes;"),
    ("A.1.1.4", "Juego de cables pasa-corriente;"),
    ("A.1.1.5", "Lámpara portátil de emergencia;"),
    ("A.1.1.6", "Neumático de refacción con accesorios (gato y llave de cruz);"),
    ("A.1.1.7", "Un extintor contra fuego tipo ABC, como mínimo."),

    // A.2
    ("A.2.1", "Reanimadores tipo bolsa con válvula de no reinhalación, con vías de entrada de oxígeno, dispositivo de concentración y válvulas de liberación (neonato 250 ml, lactante 500 ml, pediátrico 750 ml, adulto 1000 ml) + mascarillas 0,1,2,3,4,5;"),
    ("A.2.2", "Camilla rígida con sistema de sujeción;"),
    ("A.2.3", "Carro camilla;"),
    ("A.2.4", "Esfigmomanómetro aneroide con brazaletes para adulto y pediátrico;"),
    ("A.2.5", "Estetoscopio biauricular;"),
    ("A.2.6", "Equipo de aspiración de secreciones fijo o portátil;"),
    ("A.2.7", "Equipo de cánulas orofaríngeas en tamaños: prematuro, neonatal, infantil, pediátrica y adulto;"),
    ("A.2.8", "Gancho portasuero doble;"),
    ("A.2.9", "Glucómetro o sustituto tecnológico;"),
    ("A.2.10", "Mascarillas con filtro HEPA o N95;"),
    ("A.2.11", "Tanque de oxígeno fijo (≥ 3 m³) con manómetro de alta presión, flujómetro 2–15 L/min y salida para humidificador;"),
    ("A.2.12", "Tanque de oxígeno portátil tamaño “D” con manómetro, regulador y flujómetro 2–15 L/min o mayor;"),
    ("A.2.13", "Termómetro digital o sustituto tecnológico."),

    // A.3
    ("A.3.1", "Apósitos, gasas estériles y no estériles;"),
    ("A.3.2", "Cobertores;"),
    ("A.3.3", "Catéteres venosos cortos estériles (calibres 12 a 24) para terapia IV periférica;"),
    ("A.3.4", "Cómodo;"),
    ("A.3.5", "Contenedor rígido rojo para punzocortante, bolsa roja y bolsa amarilla para RPBI;"),
    ("A.3.6", "Desinfectante para manos;"),
    ("A.3.7", "Desinfectante para equipos y superficies;"),
    ("A.3.8", "Equipo desechable para venoclisis con normogotero y microgotero;"),
    ("A.3.9", "Guantes estériles, no estériles y cubre bocas;"),
    ("A.3.10", "Jabón quirúrgico;"),
    ("A.3.11", "Jeringas desechables 3, 5, 10 y 20 ml y agujas 20×32 o 22×32;"),
    ("A.3.12", "Jeringas con aguja para insulina;"),
    ("A.3.13", "Ligaduras;"),
    ("A.3.14", "Pato orinal;"),
    ("A.3.15", "Puntas nasales para oxígeno, mascarilla con bolsa reservorio y mascarilla simple (adulto y pediátrico);"),
    ("A.3.16", "Riñón;"),
    ("A.3.17", "Sábanas;"),
    ("A.3.18", "Sondas de aspiración suaves;"),
    ("A.3.19", "Tela adhesiva;"),
    ("A.3.20", "Torundas secas y torundas con alcohol;"),
    ("A.3.21", "Vendas elásticas de 5, 10, 20 y 30 cm de ancho."),

    // A.4
    ("A.4.1", "Cloruro de sodio (solución al 0.9%);"),
    ("A.4.2", "Electrolitos orales;"),
    ("A.4.3", "Glucosa (solución al 5%);"),
    ("A.4.4", "Solución Hartman."),

    // B.1
    ("B.1.1", "Equipo para comunicación funcionando."),

    // B.2
    ("B.2.1", "Collarines rígidos: chico, mediano y grande;"),
    ("B.2.2", "Cánulas nasofaríngeas;"),
    ("B.2.3", "Dispositivo para inmovilizar la cabeza;"),
    ("B.2.4", "Desfibrilador automatizado externo;"),
    ("B.2.5", "Dispositivo de estabilización pélvica o elemento sustituto;"),
    ("B.2.6", "Estetoscopio de Pinard o sustituto tecnológico;"),
    ("B.2.7.1", "Dos pinzas tipo Rochester;"),
    ("B.2.7.2", "Onfalotomo;"),
    ("B.2.7.3", "Tijera tipo Mayo;"),
    ("B.2.7.4", "Cinta umbilical o similar;"),
    ("B.2.7.5", "Perilla para aspiración;"),
    ("B.2.7.6", "Campos quirúrgicos y bata quirúrgica, desechables;"),
    ("B.2.8", "Férulas para miembros torácicos y pélvicos;"),
    ("B.2.9", "Oxímetro de pulso;"),
    ("B.2.10", "Sistema de inmovilización pediátrica;"),
    ("B.2.11", "Tabla corta con sistema de sujeción o chaleco de extracción."),

    // B.3
    ("B.3.1", "Bolsa amarilla para RPBI;"),
    ("B.3.2", "Cánula de Yankauer;"),
    ("B.3.3", "Guía para identificación de materiales peligrosos;"),
    ("B.3.4", "Rastrillo desechable para afeitar;"),
    ("B.3.5", "Sábana térmica;"),
    ("B.3.6", "Sábana para quemados;"),
    ("B.3.7", "Elementos materiales para clasificación de lesionados (triage)."),

    // B.4
    ("B.4.1.1", "Ácido acetilsalicílico, tabletas;"),
    ("B.4.1.2", "Isosorbida, tabletas;"),
    ("B.4.1.3", "Trinitrato de glicerilo, perlas sublinguales;"),
    ("B.4.1.4", "Antihipertensivos;"),
    ("B.4.2.1", "Adrenalina, solución inyectable;"),
    ("B.4.2.2", "Atropina, solución inyectable;"),
    ("B.4.2.3", "Epinefrina, solución inyectable o sustituto tecnológico;"),
    ("B.4.3.1", "Dextrosa al 50 %;"),
    ("B.4.4.1", "Salbutamol, aerosol;"),
    ("B.4.5", "Hidrocortisona;"),

    // C.1
    ("C.1.1", "Desfibrilador-monitor (registro de signos vitales) y marcapaso externo;"),
    ("C.1.2", "Estilete para tubo endotraqueal: neonatal, infantil, pediátrico y adulto;"),
    ("C.1.3", "Estuche de diagnóstico básico (mango, oftalmoscopio con luz, selector de aperturas y lentes, otoscopio con luz y conos reutilizables);"),
    ("C.1.4", "Equipo para infusión intraósea;"),
    ("C.1.5", "Laringoscopios adulto y pediátrico con hojas rectas 0,1,2,3,4 y hojas curvas 1,2,3,4;"),
    ("C.1.6", "Micro-nebulizador o sustituto tecnológico;"),
    ("C.1.7", "Pinzas de Magill adulto y pediátrica;"),
    ("C.1.8", "Ventilador de traslado pediátrico-adulto."),

    // C.2
    ("C.2.1", "Electrodos de parche autoadheribles (adulto y pediátrico) + electrodos para marcapaso transcutáneo compatibles;"),
    ("C.2.2", "Equipo invasivo para la vía aérea: mascarilla laríngea u otros;"),
    ("C.2.3", "Jalea lubricante hidrosoluble y pasta conductiva para monitoreo electrocardiográfico;"),
    ("C.2.4", "Sondas de Nelaton, Levin y Foley con bolsas para recolección;"),
    ("C.2.5", "Tubos endotraqueales adulto con globo (alto volumen / baja presión) con válvula conector y escala (6.0–9.0);"),
    ("C.2.6", "Tubos endotraqueales pediátricos sin globo con válvula conector y escala (2.0–5.5)."),

    // C.3
    ("C.3.1.1", "Ketorolaco, solución inyectable;"),
    ("C.3.1.2", "Metamizol, solución inyectable;"),
    ("C.3.1.3", "Clorhidrato de Nalbufina, solución inyectable;"),
    ("C.3.2.1", "Midazolam, solución inyectable;"),
    ("C.3.3.1", "Captopril o Enalapril, tabletas;"),
    ("C.3.4.1", "Hidrocortisona, solución inyectable o genérico alterno;"),
    ("C.3.5.1", "Butilhioscina, solución inyectable;"),
    ("C.3.5.2", "Difenidol, solución inyectable;"),
    ("C.3.5.3", "Ranitidina, solución inyectable;"),
    ("C.3.6.1", "Hidralazina, solución inyectable;"),
    ("C.3.7.1", "Diazepam, solución inyectable."),

    // D.1
    ("D.1.1.1", "Haloperidol, solución inyectable."),
];
